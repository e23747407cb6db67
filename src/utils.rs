//! Small shared helpers for log text and path handling.

use std::path::{Path, PathBuf};

/// Plural suffix for a count: empty for exactly one, `"s"` otherwise.
pub fn plural_s(n: usize) -> &'static str {
    match n {
        1 => "",
        _ => "s",
    }
}

/// Count plus pluralized noun, e.g. `"1 document"` / `"3 documents"`.
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}

/// Absolute form of `path`.
///
/// Canonicalizes when the target exists, which also resolves `.`, `..`
/// and symlinks. For paths that do not exist yet, a relative path is
/// joined onto the current directory instead.
pub fn normalize_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_plural_count_formats() {
        assert_eq!(plural_count(0, "error"), "0 errors");
        assert_eq!(plural_count(1, "error"), "1 error");
        assert_eq!(plural_count(2, "document"), "2 documents");
    }

    #[test]
    fn test_normalize_relative_becomes_absolute() {
        let normalized = normalize_path(Path::new("templates/cover.html"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("templates/cover.html"));
    }

    #[test]
    fn test_normalize_resolves_parent_components() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("a").join("photo.png"), "x").unwrap();

        let normalized = normalize_path(&nested.join("../photo.png"));
        assert!(normalized.ends_with("a/photo.png"));
        assert!(normalized.exists());
    }
}
