//! Output formatting for the CLI
//!
//! The terminal result goes to stdout, plain or JSON, where the load CLI
//! consumes it. Warnings and informational messages go to stderr so they
//! never contaminate the result stream; `quiet` suppresses the informational
//! ones.

use clap::ValueEnum;
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;

/// How the terminal result is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One absolute path per line
    #[default]
    Plain,
    /// A JSON object: `{"files": [...]}`
    Json,
}

/// Write the selected paths to stdout
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn emit_result(paths: &[PathBuf], format: OutputFormat) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Plain => {
            for path in paths {
                writeln!(stdout, "{}", path.display())?;
            }
        }
        OutputFormat::Json => {
            let files: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
            let payload = serde_json::json!({ "files": files });
            writeln!(stdout, "{payload}")?;
        }
    }
    Ok(())
}

/// Print a warning to stderr
pub fn warn(message: &str) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}

/// Print an error to stderr
pub fn error(message: &str) {
    eprintln!("{} {message}", "error:".red().bold());
}

/// Print an informational message to stderr unless quiet
pub fn info(message: &str, quiet: bool) {
    if !quiet {
        eprintln!("{message}");
    }
}
