//! Loadr - an interactive browser for picking data files before a load
//!
//! This library provides a terminal file browser that navigates a directory
//! tree, filters/sorts entries, previews data files, and matches filenames
//! against externally defined table-definition documents so the right
//! destination table can be inferred before a load. Its terminal result, an
//! ordered list of absolute file paths, is consumed by an external load CLI.

use thiserror::Error;

pub mod browse;
pub mod cli;
pub mod config;
pub mod output;
pub mod preview;
pub mod scan;
pub mod tables;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum LoadrError {
    /// Browser error
    #[error("Browser error: {0}")]
    BrowseError(#[from] browse::BrowseError),
    /// Directory scan error
    #[error("Scan error: {0}")]
    ScanError(#[from] scan::ScanError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
