//! Per-document statistics and the aggregate build report.

use std::path::Path;
use std::time::Duration;

use owo_colors::OwoColorize;

use crate::log;
use crate::utils::{plural_count, plural_s};

/// Counters for one rewritten document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStats {
    /// Whether the shared stylesheet was inlined (at most once).
    pub css_inlined: bool,
    /// SVGs spliced in as literal markup.
    pub svgs_inlined: usize,
    /// Images rewritten to base64 data URIs (rasters and oversized SVGs).
    pub images_encoded: usize,
    /// References with unsupported extensions, left unchanged.
    pub skipped: usize,
    /// Missing assets and read/encode failures.
    pub errors: usize,
}

impl DocumentStats {
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

/// One failed document, kept for the final summary.
#[derive(Debug)]
pub struct Failure {
    /// Scan-root-relative document path.
    pub path: String,
    pub reason: String,
}

/// Aggregate totals for one build run.
///
/// Owned exclusively by the orchestrator and folded strictly after each
/// document completes. The total error count drives the process exit code.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub documents: usize,
    pub css_inlined: usize,
    pub svgs_inlined: usize,
    pub images_encoded: usize,
    pub skipped: usize,
    pub errors: usize,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub failures: Vec<Failure>,
    pub elapsed: Duration,
}

impl BuildReport {
    /// Fold one document's stats into the totals.
    pub fn fold(&mut self, rel_path: &str, stats: &DocumentStats) {
        self.documents += 1;
        self.css_inlined += usize::from(stats.css_inlined);
        self.svgs_inlined += stats.svgs_inlined;
        self.images_encoded += stats.images_encoded;
        self.skipped += stats.skipped;
        self.errors += stats.errors;

        if stats.has_errors() {
            self.failures.push(Failure {
                path: rel_path.to_string(),
                reason: plural_count(stats.errors, "error"),
            });
        }
    }

    /// Record a document-level failure outside the rewrite itself
    /// (unreadable source, unwritable output).
    pub fn fail_document(&mut self, rel_path: &str, reason: String) {
        self.documents += 1;
        self.errors += 1;
        self.failures.push(Failure {
            path: rel_path.to_string(),
            reason,
        });
    }

    /// Record a failed output write for an already-folded document.
    pub fn fail_write(&mut self, rel_path: &str, reason: String) {
        self.errors += 1;
        self.failures.push(Failure {
            path: rel_path.to_string(),
            reason,
        });
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Print the final summary.
    pub fn print(&self, output_dir: &Path) {
        if !self.failures.is_empty() {
            eprintln!();
            eprintln!(
                "{} {}",
                "failures".red().bold(),
                format!(
                    "({} file{}, {} error{})",
                    self.failures.len(),
                    plural_s(self.failures.len()),
                    self.errors,
                    plural_s(self.errors)
                )
                .dimmed()
            );
            for failure in &self.failures {
                eprintln!(
                    "{} {} {}",
                    "→".red(),
                    failure.path.cyan(),
                    failure.reason.dimmed()
                );
            }
            eprintln!();
        }

        log!("build";
            "css({}) svg({}) base64({}) skipped({}) errors({})",
            self.css_inlined,
            self.svgs_inlined,
            self.images_encoded,
            self.skipped,
            self.errors
        );
        log!("build";
            "{} → {} ({} → {}) in {:.2}s",
            plural_count(self.documents, "document"),
            output_dir.display(),
            human_bytes(self.bytes_in),
            human_bytes(self.bytes_out),
            self.elapsed.as_secs_f64()
        );
    }
}

/// Format a byte count as B/KB/MB for the summary line.
pub fn human_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    let bytes = bytes as f64;
    if bytes >= MB {
        format!("{:.1}MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.1}KB", bytes / KB)
    } else {
        format!("{bytes}B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_sums_counters() {
        let mut report = BuildReport::default();
        report.fold(
            "a.html",
            &DocumentStats {
                css_inlined: true,
                svgs_inlined: 2,
                images_encoded: 1,
                skipped: 0,
                errors: 0,
            },
        );
        report.fold(
            "b.html",
            &DocumentStats {
                css_inlined: false,
                svgs_inlined: 1,
                images_encoded: 3,
                skipped: 2,
                errors: 1,
            },
        );

        assert_eq!(report.documents, 2);
        assert_eq!(report.css_inlined, 1);
        assert_eq!(report.svgs_inlined, 3);
        assert_eq!(report.images_encoded, 4);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.errors, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, "b.html");
    }

    #[test]
    fn test_fail_document_counts_one_error() {
        let mut report = BuildReport::default();
        report.fail_document("broken.html", "unreadable".to_string());

        assert_eq!(report.documents, 1);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.failures.len(), 1);
    }

    #[test]
    fn test_human_bytes() {
        assert_eq!(human_bytes(512), "512B");
        assert_eq!(human_bytes(2048), "2.0KB");
        assert_eq!(human_bytes(3 * 1024 * 1024), "3.0MB");
    }
}
