//! Error types.
//!
//! Two severity tiers with separate channels:
//! - [`AssetError`] is recoverable per reference. The reference stays
//!   unchanged in the output, the document's error counter goes up, and
//!   processing continues.
//! - Scan and configuration failures go through `anyhow` at the
//!   orchestrator and abort the run before any output is written.

use std::path::PathBuf;

use thiserror::Error;

/// Recoverable failure while processing one asset reference.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The referenced path does not resolve to an existing file relative to
    /// its containing document.
    #[error("missing asset: {0}")]
    Missing(PathBuf),

    /// The asset exists but could not be read.
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
