//! Loadr CLI application entry point
//!
//! Interactive terminal browser for picking data files and matching them to
//! destination tables before a load.
//!
//! # Usage
//!
//! ```bash
//! # Browse the current directory
//! loadr
//!
//! # Browse a drop directory with table definitions from a custom location
//! loadr /srv/feeds --config-dir /etc/loadr/tables
//!
//! # Emit the selection as JSON for the load CLI
//! loadr --format json
//!
//! # Only list .dat files, newest first
//! loadr -e dat --sort date
//! ```
//!
//! Exit status is 0 when files were chosen and 1 on cancellation, so shell
//! pipelines can tell an aborted session from a selection.
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/loadr/config.toml` on Linux); table-definition documents are
//! read from the configured directory, `tables/` beside the config file by
//! default.

use clap::Parser;
use loadr::browse::{self, BrowserSession, CrosstermEvents, Outcome};
use loadr::cli::{self, Cli};
use loadr::config::LoadrConfig;
use loadr::output;
use loadr::preview::{PreviewGenerator, PreviewLimits};
use loadr::scan::{DirectoryCache, ScanOptions, SortKey};
use loadr::tables::TableMatcher;
use loadr::LoadrError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        cli::print_completions(shell);
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Run one browser session
///
/// Returns `Ok(true)` when a selection was emitted and `Ok(false)` on
/// cancellation.
fn run(cli: &Cli) -> Result<bool, LoadrError> {
    let config = LoadrConfig::load()?;
    let quiet = cli.quiet || config.quiet;

    let table_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => config.table_dir()?,
    };

    let (matcher, warnings) = TableMatcher::load(&table_dir);
    for warning in &warnings {
        output::warn(&warning.to_string());
    }
    if matcher.is_empty() {
        output::info(
            &format!(
                "no table definitions loaded from {}; files will match no tables",
                table_dir.display()
            ),
            quiet,
        );
    }

    let scan_options = ScanOptions {
        show_hidden: cli.show_hidden || config.show_hidden,
        extensions: if cli.extensions.is_empty() {
            config.extensions.clone()
        } else {
            cli.extensions.iter().map(|e| e.to_lowercase()).collect()
        },
    };

    let limits = PreviewLimits {
        max_lines: cli.preview_lines.unwrap_or(config.preview_lines),
        max_line_bytes: config.preview_line_bytes,
    };

    let session = BrowserSession::new(
        &cli.start_dir,
        DirectoryCache::new(config.cache_capacity),
        matcher,
        scan_options,
        cli.sort.map_or(SortKey::Name, Into::into),
        PreviewGenerator::new(limits),
    )?;

    let mut events = CrosstermEvents;
    match browse::run(session, &mut events)? {
        Outcome::Selected(paths) => {
            output::emit_result(&paths, cli.format)?;
            Ok(true)
        }
        Outcome::Cancelled => {
            output::info("cancelled, no files selected", quiet);
            Ok(false)
        }
    }
}
