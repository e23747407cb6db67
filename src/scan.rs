//! Document discovery.
//!
//! Walks the scan target and returns every `.html` file, excluding the
//! output directory so previously generated documents are never picked up
//! as sources on a later run.

use std::path::PathBuf;

use anyhow::{Context, Result};
use jwalk::{Parallelism, WalkDir};

use crate::config::{BuildConfig, ScanTarget};

/// Collect every `.html` document under the scan target.
///
/// Results are sorted for a deterministic processing order. A missing or
/// unreadable scan root is fatal for the whole run.
pub fn collect_documents(config: &BuildConfig) -> Result<Vec<PathBuf>> {
    let dir = match &config.target {
        ScanTarget::File(file) => return Ok(vec![file.clone()]),
        ScanTarget::Directory(dir) => dir.clone(),
    };

    // jwalk swallows per-entry errors, so probe the root up front to keep
    // "root not listable" a fatal error.
    std::fs::read_dir(&dir)
        .with_context(|| format!("failed to scan template directory: {}", dir.display()))?;

    let output_dir = config.output_dir.clone();
    let documents = WalkDir::new(&dir)
        .sort(true)
        .parallelism(Parallelism::Serial)
        .process_read_dir(move |_depth, _path, _state, children| {
            // Prune the output directory instead of filtering afterwards:
            // it is never entered at all.
            children.retain(|entry| {
                entry
                    .as_ref()
                    .map(|e| e.path() != output_dir)
                    .unwrap_or(true)
            });
        })
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("html"))
        .collect();

    Ok(documents)
}
