//! Browser session state machine
//!
//! This module implements the session logic for the interactive browser. The
//! session owns all mutable navigation state (current directory, sort key,
//! filter, selection set, mode) and is UI-free: it consumes one [`Key`] at a
//! time and reports whether the loop should continue or finish with a
//! terminal result. Rendering and event reading live in sibling modules, so
//! the whole state machine is testable without a terminal.
//!
//! # Modes
//!
//! ```text
//! Browsing ──'/'──▶ Searching ──Enter/Esc──▶ Browsing
//!    │ 'p' on file
//!    ▼
//! PreviewOpen ──any key──▶ Browsing
//!    │ 'q'/Esc, or Enter on a file
//!    ▼
//! Exiting (terminal: Selected or Cancelled)
//! ```

use crate::browse::events::Key;
use crate::preview::{Preview, PreviewGenerator};
use crate::scan::ordering::{filter_entries, sort_entries};
use crate::scan::{DirectoryCache, FileEntry, ScanOptions, SortKey};
use crate::tables::{TableDefinition, TableMatcher};
use std::io;
use std::path::{Path, PathBuf};

/// Current session mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigating the entry list
    #[default]
    Browsing,
    /// Editing the filter text line
    Searching,
    /// A file preview is on screen
    PreviewOpen,
    /// Terminal state; no further events are handled
    Exiting,
}

/// One visible row of the entry list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// The synthetic parent entry, always shown first away from the root
    Parent,
    /// A scanned entry
    Entry(FileEntry),
}

impl Row {
    /// Display name for the row
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Parent => "..",
            Self::Entry(entry) => &entry.name,
        }
    }
}

/// Terminal result of one browser session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user confirmed a non-empty, ordered set of file paths
    Selected(Vec<PathBuf>),
    /// The user cancelled; distinguishable from an empty filter result
    Cancelled,
}

/// Whether the loop continues or the session is finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Render and wait for the next event
    Continue,
    /// Session finished with a terminal result
    Done(Outcome),
}

/// Interactive browser session state
///
/// All state lives here rather than in process-wide globals; the selection
/// set persists across directory navigation and is cleared only by
/// cancellation or successful completion.
pub struct BrowserSession {
    cache: DirectoryCache,
    matcher: TableMatcher,
    scan_options: ScanOptions,
    current_dir: PathBuf,
    sort_key: SortKey,
    filter_text: String,
    search_draft: String,
    selection: Vec<PathBuf>,
    mode: Mode,
    cursor: usize,
    scroll_offset: usize,
    visible_height: usize,
    preview: Option<Preview>,
    previewer: PreviewGenerator,
    status: Option<String>,
}

impl BrowserSession {
    /// Create a session rooted at `start_dir`
    ///
    /// The start directory is canonicalized so every emitted path is
    /// absolute.
    ///
    /// # Errors
    ///
    /// Returns an error if `start_dir` cannot be canonicalized.
    pub fn new(
        start_dir: &Path,
        cache: DirectoryCache,
        matcher: TableMatcher,
        scan_options: ScanOptions,
        sort_key: SortKey,
        previewer: PreviewGenerator,
    ) -> io::Result<Self> {
        let current_dir = std::fs::canonicalize(start_dir)?;
        Ok(Self {
            cache,
            matcher,
            scan_options,
            current_dir,
            sort_key,
            filter_text: String::new(),
            search_draft: String::new(),
            selection: Vec::new(),
            mode: Mode::Browsing,
            cursor: 0,
            scroll_offset: 0,
            visible_height: 20,
            preview: None,
            previewer,
            status: None,
        })
    }

    /// Recompute the visible rows for the current state
    ///
    /// Each cycle recomputes `filter(sort(cache.get(current_dir)))` over a
    /// clone of the cached listing; the cache contents are never mutated by
    /// sorting or filtering. A directory-level error produces an annotated
    /// empty listing (just the parent row) instead of being discarded.
    pub fn visible_rows(&mut self) -> Vec<Row> {
        let mut rows = Vec::new();
        if self.current_dir.parent().is_some() {
            rows.push(Row::Parent);
        }

        match self.cache.get(&self.current_dir, &self.scan_options) {
            Ok(listing) => {
                self.status = if listing.warnings.is_empty() {
                    None
                } else {
                    Some(format!(
                        "{} entr{} skipped: {}",
                        listing.warnings.len(),
                        if listing.warnings.len() == 1 { "y" } else { "ies" },
                        listing.warnings[0]
                    ))
                };
                let mut entries = listing.entries.clone();
                sort_entries(&mut entries, self.sort_key);
                rows.extend(
                    filter_entries(&entries, &self.filter_text)
                        .into_iter()
                        .map(Row::Entry),
                );
            }
            Err(e) => {
                self.status = Some(e.to_string());
            }
        }

        if self.cursor >= rows.len() {
            self.cursor = rows.len().saturating_sub(1);
        }
        self.adjust_scroll();
        rows
    }

    /// Handle one input event
    ///
    /// Events are strictly serialized: the caller renders, blocks for one
    /// event, and hands it here before rendering again.
    pub fn handle(&mut self, key: Key) -> Step {
        match self.mode {
            Mode::Browsing => self.handle_browsing(key),
            Mode::Searching => self.handle_searching(key),
            Mode::PreviewOpen => {
                // Any key dismisses the preview with no side effects.
                self.preview = None;
                self.mode = Mode::Browsing;
                Step::Continue
            }
            Mode::Exiting => Step::Done(Outcome::Cancelled),
        }
    }

    fn handle_browsing(&mut self, key: Key) -> Step {
        let rows = self.visible_rows();
        match key {
            Key::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                self.adjust_scroll();
            }
            Key::Down => {
                if self.cursor + 1 < rows.len() {
                    self.cursor += 1;
                    self.adjust_scroll();
                }
            }
            Key::PageUp => {
                self.cursor = self.cursor.saturating_sub(self.visible_height);
                self.adjust_scroll();
            }
            Key::PageDown => {
                self.cursor = (self.cursor + self.visible_height)
                    .min(rows.len().saturating_sub(1));
                self.adjust_scroll();
            }
            Key::Home => {
                self.cursor = 0;
                self.adjust_scroll();
            }
            Key::End => {
                self.cursor = rows.len().saturating_sub(1);
                self.adjust_scroll();
            }
            Key::Enter => return self.confirm(&rows),
            Key::Tab => self.toggle_select(&rows),
            Key::Char('p') => self.open_preview(&rows),
            Key::Char('/') => {
                self.search_draft = self.filter_text.clone();
                self.mode = Mode::Searching;
            }
            Key::Char('s') => {
                self.sort_key = self.sort_key.next();
            }
            Key::Char('r') => {
                self.cache.invalidate(&self.current_dir);
            }
            Key::Char('h') => {
                self.scan_options.show_hidden = !self.scan_options.show_hidden;
                self.cache.invalidate_all();
            }
            Key::Char('q') | Key::Esc | Key::CtrlC => {
                self.selection.clear();
                self.mode = Mode::Exiting;
                return Step::Done(Outcome::Cancelled);
            }
            _ => {}
        }
        Step::Continue
    }

    fn handle_searching(&mut self, key: Key) -> Step {
        match key {
            Key::Char(c) => self.search_draft.push(c),
            Key::Backspace => {
                self.search_draft.pop();
            }
            Key::Enter => {
                self.filter_text = std::mem::take(&mut self.search_draft);
                self.cursor = 0;
                self.scroll_offset = 0;
                self.mode = Mode::Browsing;
            }
            Key::Esc => {
                // Abandon the edit; the previous filter stays in force.
                self.search_draft.clear();
                self.mode = Mode::Browsing;
            }
            Key::CtrlC => {
                self.selection.clear();
                self.mode = Mode::Exiting;
                return Step::Done(Outcome::Cancelled);
            }
            _ => {}
        }
        Step::Continue
    }

    fn confirm(&mut self, rows: &[Row]) -> Step {
        match rows.get(self.cursor) {
            Some(Row::Parent) => {
                if let Some(parent) = self.current_dir.parent() {
                    self.change_directory(parent.to_path_buf());
                }
                Step::Continue
            }
            Some(Row::Entry(entry)) if entry.is_dir() => {
                self.change_directory(entry.path.clone());
                Step::Continue
            }
            Some(Row::Entry(entry)) => {
                let result = if self.selection.is_empty() {
                    vec![entry.path.clone()]
                } else {
                    if !self.selection.contains(&entry.path) {
                        self.selection.push(entry.path.clone());
                    }
                    std::mem::take(&mut self.selection)
                };
                self.mode = Mode::Exiting;
                Step::Done(Outcome::Selected(result))
            }
            None => Step::Continue,
        }
    }

    fn toggle_select(&mut self, rows: &[Row]) {
        if let Some(Row::Entry(entry)) = rows.get(self.cursor) {
            if entry.is_dir() {
                return;
            }
            if let Some(pos) = self.selection.iter().position(|p| p == &entry.path) {
                self.selection.remove(pos);
            } else {
                self.selection.push(entry.path.clone());
            }
            // Advance so repeated Tab presses walk the list.
            if self.cursor + 1 < rows.len() {
                self.cursor += 1;
                self.adjust_scroll();
            }
        }
    }

    fn open_preview(&mut self, rows: &[Row]) {
        if let Some(Row::Entry(entry)) = rows.get(self.cursor) {
            if !entry.is_dir() {
                self.preview = Some(self.previewer.generate(&entry.path));
                self.mode = Mode::PreviewOpen;
            }
        }
    }

    fn change_directory(&mut self, dir: PathBuf) {
        self.current_dir = dir;
        self.cursor = 0;
        self.scroll_offset = 0;
        self.status = None;
    }

    // Recenter the window only when the cursor would leave it.
    fn adjust_scroll(&mut self) {
        if self.visible_height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + self.visible_height {
            self.scroll_offset = self.cursor + 1 - self.visible_height;
        }
    }

    /// Table definitions matching a file entry's name, in load order
    ///
    /// Every match is reported; when a filename satisfies more than one
    /// definition the caller presents all of them rather than picking one.
    #[must_use]
    pub fn matches_for(&self, entry: &FileEntry) -> Vec<&TableDefinition> {
        if entry.is_dir() {
            Vec::new()
        } else {
            self.matcher.matches(&entry.name)
        }
    }

    /// Current mode
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Directory currently being browsed
    #[must_use]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Active sort key
    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Committed filter text
    #[must_use]
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// In-progress filter text while searching
    #[must_use]
    pub fn search_draft(&self) -> &str {
        &self.search_draft
    }

    /// Whether a path is in the selection set
    #[must_use]
    pub fn is_selected(&self, path: &Path) -> bool {
        self.selection.iter().any(|p| p == path)
    }

    /// Number of selected files
    #[must_use]
    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Cursor position within the visible rows
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// First visible row index
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Update the number of list rows the terminal can show
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Current status line, if any
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// The open preview, when in [`Mode::PreviewOpen`]
    #[must_use]
    pub const fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Whether hidden entries are currently included
    #[must_use]
    pub const fn show_hidden(&self) -> bool {
        self.scan_options.show_hidden
    }
}
