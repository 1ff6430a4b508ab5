//! Scan error types

use std::path::PathBuf;
use thiserror::Error;

/// Directory-level scan failures
///
/// Per-entry failures are not errors; they are recorded as
/// [`ScanWarning`](super::ScanWarning)s and the scan continues.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The directory itself could not be opened
    #[error("cannot read directory {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}
