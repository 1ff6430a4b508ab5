//! Table definition error types

use std::path::PathBuf;
use thiserror::Error;

/// Failures while compiling a filename template
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template is empty
    #[error("empty filename template")]
    Empty,

    /// The compiled regex was rejected
    #[error("template '{template}' produced an invalid matcher: {detail}")]
    Compile { template: String, detail: String },
}

/// A skipped document or definition, recorded during loading
///
/// One bad document never prevents the rest from loading; the failure is
/// recorded here and surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// Document the failure came from
    pub path: PathBuf,
    /// Human-readable failure description
    pub message: String,
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}
