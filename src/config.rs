//! Build configuration and fixed constants.
//!
//! Everything here is compile-time fixed except the paths derived from the
//! single positional CLI argument. There is no config file and no
//! environment override.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::cli::Cli;
use crate::utils::normalize_path;

/// SVGs at or below this many bytes are spliced in as literal markup.
/// Larger ones fall back to a base64 data URI.
pub const SVG_INLINE_MAX_BYTES: u64 = 5120;

/// Name of the output directory created alongside the scanned templates.
pub const OUTPUT_DIR_NAME: &str = "embedded";

/// Filename of the shared stylesheet inlined into referencing documents.
pub const SHARED_STYLESHEET: &str = "styles.css";

/// Raster extensions eligible for base64 encoding.
pub const RASTER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// What the positional CLI argument selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanTarget {
    /// Recurse into a directory.
    Directory(PathBuf),
    /// Process a single document.
    File(PathBuf),
}

/// Resolved configuration for one build run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Template root. The shared stylesheet lives here and output paths are
    /// re-rooted relative to the scan root.
    pub root: PathBuf,
    /// What to scan: the root itself, a subdirectory, or one `.html` file.
    pub target: ScanTarget,
    /// Output directory (`<root>/embedded`).
    pub output_dir: PathBuf,
    /// Shared stylesheet path (`<root>/styles.css`).
    pub stylesheet: PathBuf,
}

impl BuildConfig {
    /// Resolve the configuration from CLI arguments.
    ///
    /// A path argument that does not exist, or that names a file without an
    /// `.html` extension, is fatal: nothing has been scanned yet and there
    /// is no sensible partial result.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let Some(path) = &cli.path else {
            let root = normalize_path(Path::new("."));
            return Ok(Self::for_root(root.clone(), ScanTarget::Directory(root)));
        };

        let path = normalize_path(path);
        if path.is_dir() {
            return Ok(Self::for_root(path.clone(), ScanTarget::Directory(path)));
        }
        if path.is_file() {
            if path.extension().and_then(|e| e.to_str()) != Some("html") {
                bail!("not an .html file: {}", path.display());
            }
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("/"));
            return Ok(Self::for_root(root, ScanTarget::File(path)));
        }

        bail!("path does not exist: {}", path.display());
    }

    fn for_root(root: PathBuf, target: ScanTarget) -> Self {
        let output_dir = root.join(OUTPUT_DIR_NAME);
        let stylesheet = root.join(SHARED_STYLESHEET);
        Self {
            root,
            target,
            output_dir,
            stylesheet,
        }
    }

    /// Directory that document paths are made relative to when re-rooting
    /// under the output directory.
    pub fn scan_root(&self) -> &Path {
        match &self.target {
            ScanTarget::Directory(dir) => dir,
            ScanTarget::File(file) => file.parent().unwrap_or(&self.root),
        }
    }
}
