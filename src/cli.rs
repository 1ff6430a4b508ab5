//! Command-line interface definitions
//!
//! Defines the clap command structure for loadr. The browser is the whole
//! program: flags tune where it starts, which files it lists, and how the
//! terminal result is emitted for the downstream load CLI.

use crate::output::OutputFormat;
use crate::scan::SortKey;
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

/// Interactive browser for picking data files and matching them to
/// destination tables
#[derive(Debug, Parser)]
#[command(name = "loadr", version, about)]
pub struct Cli {
    /// Directory to start browsing in
    #[arg(default_value = ".")]
    pub start_dir: PathBuf,

    /// Directory holding table-definition documents
    ///
    /// Defaults to the configured directory, falling back to `tables/`
    /// beside the config file.
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Include hidden entries
    #[arg(long)]
    pub show_hidden: bool,

    /// Maximum preview content lines
    #[arg(long, value_name = "N")]
    pub preview_lines: Option<usize>,

    /// Accepted data-file extension (repeatable, overrides configuration)
    #[arg(short = 'e', long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Initial sort key
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// How the selected paths are written to stdout
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Suppress informational output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Sort key as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Case-insensitive ascending by name
    Name,
    /// Descending by size
    Size,
    /// Descending by modification time
    Date,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => Self::Name,
            SortArg::Size => Self::Size,
            SortArg::Date => Self::Date,
        }
    }
}

/// Print completions for `shell` to stdout
pub fn print_completions(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
}
