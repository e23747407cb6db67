//! Build command: walk, rewrite, write, report.
//!
//! Documents are processed one at a time in walk order. A failing document
//! is recorded and skipped; the rest of the run is unaffected.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};

use crate::config::BuildConfig;
use crate::report::{BuildReport, DocumentStats};
use crate::rewrite;
use crate::scan;
use crate::utils::plural_count;
use crate::{debug, log};

/// Run the whole build and return the aggregate report.
///
/// The caller maps the report's error count onto the process exit code.
pub fn build_templates(config: &BuildConfig) -> Result<BuildReport> {
    let started = Instant::now();

    let documents = scan::collect_documents(config)?;
    log!("build";
        "{} under {}",
        plural_count(documents.len(), "document"),
        config.scan_root().display()
    );

    let mut report = BuildReport::default();
    for doc in &documents {
        process_document(doc, config, &mut report);
    }

    report.elapsed = started.elapsed();
    report.print(&config.output_dir);
    Ok(report)
}

/// Read, rewrite, and write one document, folding its stats into the report.
fn process_document(path: &Path, config: &BuildConfig, report: &mut BuildReport) {
    let rel = rel_path(path, config);

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            log!("error"; "{}: unreadable source: {}", rel, e);
            report.fail_document(&rel, format!("unreadable source: {e}"));
            return;
        }
    };

    let (rewritten, stats) = rewrite::rewrite_document(&source, path, config);
    log_progress(&rel, &source, &rewritten, &stats);
    report.fold(&rel, &stats);

    let output = config.output_dir.join(&rel);
    match write_output(&output, &rewritten) {
        Ok(()) => {
            report.bytes_in += source.len() as u64;
            report.bytes_out += rewritten.len() as u64;
        }
        Err(e) => {
            log!("error"; "{}: {:#}", rel, e);
            report.fail_write(&rel, format!("{e:#}"));
        }
    }
}

/// Create the output path's directory hierarchy and write the document.
fn write_output(output: &Path, text: &str) -> Result<()> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(output, text).with_context(|| format!("failed to write {}", output.display()))
}

/// Scan-root-relative path used for output re-rooting and log lines.
fn rel_path(path: &Path, config: &BuildConfig) -> String {
    path.strip_prefix(config.scan_root())
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| PathBuf::from(path.file_name().unwrap_or_default()))
        .display()
        .to_string()
}

fn log_progress(rel: &str, source: &str, rewritten: &str, stats: &DocumentStats) {
    log!("build";
        "{} css({}) svg({}) base64({}) skipped({}) errors({})",
        rel,
        u8::from(stats.css_inlined),
        stats.svgs_inlined,
        stats.images_encoded,
        stats.skipped,
        stats.errors
    );
    debug!("build";
        "{} size {} → {}",
        rel,
        crate::report::human_bytes(source.len() as u64),
        crate::report::human_bytes(rewritten.len() as u64)
    );
}
