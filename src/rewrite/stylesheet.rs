//! Shared stylesheet inlining.
//!
//! A document that links the shared stylesheet gets the link tag replaced
//! with an inline `<style>` block so the rendered output needs no further
//! filesystem access for styles.

use std::fs;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::BuildConfig;
use crate::report::DocumentStats;
use crate::{debug, log};

/// `<link ...>` tag with a double-quoted href attribute.
static LINK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<link\b[^>]*\bhref\s*=\s*"([^"]*)"[^>]*>"#).unwrap());

/// Inline the shared stylesheet into `text` if the document links it.
///
/// At most one substitution per document. A read failure leaves the link
/// untouched and counts as one error.
pub fn inline_stylesheet(text: &mut String, config: &BuildConfig, stats: &mut DocumentStats) {
    let stylesheet_name = config
        .stylesheet
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let Some(range) = LINK_TAG
        .captures_iter(text)
        .find(|caps| {
            // Match on a whole path component so e.g. "print-styles.css"
            // is not mistaken for "styles.css".
            let href = &caps[1];
            href == stylesheet_name || href.ends_with(&format!("/{stylesheet_name}"))
        })
        .map(|caps| caps.get(0).map(|m| m.range()).unwrap_or_default())
    else {
        return;
    };

    let css = match fs::read_to_string(&config.stylesheet) {
        Ok(css) => css,
        Err(e) => {
            stats.errors += 1;
            log!("error"; "failed to read shared stylesheet {}: {}", config.stylesheet.display(), e);
            return;
        }
    };

    debug!("inline"; "stylesheet {}", config.stylesheet.display());
    text.replace_range(range, &format!("<style>\n{css}\n</style>"));
    stats.css_inlined = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanTarget;
    use std::path::Path;
    use tempfile::TempDir;

    fn config_for(root: &Path) -> BuildConfig {
        BuildConfig {
            root: root.to_path_buf(),
            target: ScanTarget::Directory(root.to_path_buf()),
            output_dir: root.join("embedded"),
            stylesheet: root.join("styles.css"),
        }
    }

    #[test]
    fn test_inlines_matching_link() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("styles.css"), "body{color:red}").unwrap();
        let config = config_for(dir.path());

        let mut text =
            r#"<head><link rel="stylesheet" href="../styles.css"></head>"#.to_string();
        let mut stats = DocumentStats::default();
        inline_stylesheet(&mut text, &config, &mut stats);

        assert_eq!(text, "<head><style>\nbody{color:red}\n</style></head>");
        assert!(stats.css_inlined);
        assert_eq!(stats.errors, 0);
    }

    #[test]
    fn test_substitutes_at_most_once() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("styles.css"), "p{}").unwrap();
        let config = config_for(dir.path());

        let link = r#"<link rel="stylesheet" href="styles.css">"#;
        let mut text = format!("{link}{link}");
        let mut stats = DocumentStats::default();
        inline_stylesheet(&mut text, &config, &mut stats);

        assert_eq!(text.matches("<style>").count(), 1);
        assert_eq!(text.matches("<link").count(), 1);
        assert!(stats.css_inlined);
    }

    #[test]
    fn test_other_hrefs_untouched() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("styles.css"), "p{}").unwrap();
        let config = config_for(dir.path());

        let original = r#"<link rel="stylesheet" href="print.css">"#;
        let mut text = original.to_string();
        let mut stats = DocumentStats::default();
        inline_stylesheet(&mut text, &config, &mut stats);

        assert_eq!(text, original);
        assert!(!stats.css_inlined);
        assert_eq!(stats.errors, 0);
    }

    #[test]
    fn test_suffix_collision_untouched() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("styles.css"), "p{}").unwrap();
        let config = config_for(dir.path());

        // Same filename suffix but a different stylesheet.
        let original = r#"<link rel="stylesheet" href="print-styles.css">"#;
        let mut text = original.to_string();
        let mut stats = DocumentStats::default();
        inline_stylesheet(&mut text, &config, &mut stats);

        assert_eq!(text, original);
        assert!(!stats.css_inlined);
        assert_eq!(stats.errors, 0);
    }

    #[test]
    fn test_read_failure_leaves_link_and_counts_error() {
        let dir = TempDir::new().unwrap();
        // No styles.css on disk.
        let config = config_for(dir.path());

        let original = r#"<link rel="stylesheet" href="styles.css">"#;
        let mut text = original.to_string();
        let mut stats = DocumentStats::default();
        inline_stylesheet(&mut text, &config, &mut stats);

        assert_eq!(text, original);
        assert!(!stats.css_inlined);
        assert_eq!(stats.errors, 1);
    }
}
