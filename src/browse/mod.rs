//! Interactive browser
//!
//! Single-threaded, cooperative loop: render, block for exactly one input
//! event, handle it, repeat. No background threads, prefetching, or timers;
//! any scan or preview read blocks the loop for its I/O duration. Two input
//! events are never processed concurrently, and a render always reflects the
//! state as of the end of the previous event's handling.

pub mod events;
pub mod session;
pub mod ui;

pub use events::{CrosstermEvents, EventSource, Key};
pub use session::{BrowserSession, Mode, Outcome, Row, Step};
pub use ui::Tui;

use thiserror::Error;

/// Errors that can occur while running the browser
#[derive(Debug, Error)]
pub enum BrowseError {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Run a session against the real terminal until it produces a result
///
/// The terminal is restored before returning, including on error.
///
/// # Errors
///
/// Returns an error if terminal setup, drawing, or event reading fails.
pub fn run(mut session: BrowserSession, events: &mut dyn EventSource) -> Result<Outcome, BrowseError> {
    let mut tui = Tui::new()?;
    let outcome = run_loop(&mut session, events, &mut tui);
    drop(tui);
    outcome
}

fn run_loop(
    session: &mut BrowserSession,
    events: &mut dyn EventSource,
    tui: &mut Tui,
) -> Result<Outcome, BrowseError> {
    loop {
        let rows = session.visible_rows();
        tui.draw(session, &rows)?;
        let key = events.next()?;
        if let Step::Done(outcome) = session.handle(key) {
            return Ok(outcome);
        }
    }
}
