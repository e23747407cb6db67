//! Asset path resolution relative to the referencing document.

use std::path::{Path, PathBuf};

use crate::utils::normalize_path;

/// Outcome of resolving one referenced asset path.
///
/// `Missing` is data, not an error value: the caller classifies it as a
/// recoverable per-reference problem and leaves the reference unchanged.
#[derive(Debug)]
pub enum Resolution {
    /// The path exists on disk relative to the document's directory.
    Found(ResolvedAsset),
    /// Already a data URI or an external URL; never resolved or rewritten.
    PassThrough,
    /// No file at the resolved location.
    Missing(PathBuf),
}

/// An asset reference resolved to a real file.
#[derive(Debug, Clone)]
pub struct ResolvedAsset {
    pub path: PathBuf,
    pub size: u64,
    /// Lowercase extension, empty if the file has none.
    pub extension: String,
}

/// Resolve an asset path taken verbatim from a document.
///
/// The path is interpreted relative to the document's own directory, not
/// the template root.
pub fn resolve_asset(doc_path: &Path, src: &str) -> Resolution {
    if src.starts_with("data:") || src.starts_with("http://") || src.starts_with("https://") {
        return Resolution::PassThrough;
    }

    let dir = doc_path.parent().unwrap_or_else(|| Path::new("."));
    let candidate = normalize_path(&dir.join(src));

    match std::fs::metadata(&candidate) {
        Ok(meta) if meta.is_file() => Resolution::Found(ResolvedAsset {
            extension: candidate
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_ascii_lowercase)
                .unwrap_or_default(),
            size: meta.len(),
            path: candidate,
        }),
        _ => Resolution::Missing(candidate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_pass_through_prefixes() {
        let doc = Path::new("/templates/cover.html");
        for src in [
            "data:image/png;base64,AAAA",
            "http://example.com/logo.png",
            "https://example.com/logo.png",
        ] {
            assert!(matches!(resolve_asset(doc, src), Resolution::PassThrough));
        }
    }

    #[test]
    fn test_resolves_relative_to_document() {
        let dir = TempDir::new().unwrap();
        let pages = dir.path().join("pages");
        fs::create_dir_all(&pages).unwrap();
        fs::write(dir.path().join("logo.png"), [1u8, 2, 3]).unwrap();
        let doc = pages.join("cover.html");

        match resolve_asset(&doc, "../logo.png") {
            Resolution::Found(asset) => {
                assert_eq!(asset.size, 3);
                assert_eq!(asset.extension, "png");
                assert!(asset.path.ends_with("logo.png"));
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_extension_is_lowercased() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ICON.SVG"), "<svg/>").unwrap();
        let doc = dir.path().join("cover.html");

        match resolve_asset(&doc, "ICON.SVG") {
            Resolution::Found(asset) => assert_eq!(asset.extension, "svg"),
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_asset() {
        let dir = TempDir::new().unwrap();
        let doc = dir.path().join("cover.html");

        match resolve_asset(&doc, "nope.png") {
            Resolution::Missing(path) => assert!(path.ends_with("nope.png")),
            other => panic!("expected Missing, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_is_not_a_match() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("icons.svg")).unwrap();
        let doc = dir.path().join("cover.html");

        assert!(matches!(
            resolve_asset(&doc, "icons.svg"),
            Resolution::Missing(_)
        ));
    }
}
