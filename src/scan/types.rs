//! Directory entry types

use std::path::PathBuf;
use std::time::SystemTime;

/// What kind of filesystem object an entry is
///
/// For symlinks this reflects the link itself, never the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A directory
    Directory,
    /// A regular file
    RegularFile,
    /// A symbolic link (not followed)
    Symlink,
}

/// A single scanned directory entry
///
/// Recomputed on every scan; never persisted across sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path to the entry
    pub path: PathBuf,
    /// Base name of the entry
    pub name: String,
    /// Entry kind (lstat semantics for symlinks)
    pub kind: EntryKind,
    /// Size in bytes (of the link itself for symlinks)
    pub size: u64,
    /// Modification time (of the link itself for symlinks)
    pub modified: SystemTime,
    /// Resolved link target, attached for display purposes only
    pub link_target: Option<PathBuf>,
}

impl FileEntry {
    /// Whether this entry is a directory
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }
}

/// A per-entry failure recorded during a scan
///
/// Entry-level failures (permission denied, race-deleted file) never fail the
/// whole scan; the entry is skipped and the failure is recorded here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    /// Path of the entry that could not be scanned
    pub path: PathBuf,
    /// Human-readable failure description
    pub message: String,
}

impl std::fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Result of scanning one directory
#[derive(Debug, Clone, Default)]
pub struct Listing {
    /// Entries that were scanned successfully
    pub entries: Vec<FileEntry>,
    /// Entries that were skipped, with the reason
    pub warnings: Vec<ScanWarning>,
}

/// Options controlling which entries a scan includes
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Include entries whose name starts with a dot
    pub show_hidden: bool,
    /// Accepted data-file extensions (lowercase, without the dot)
    pub extensions: Vec<String>,
}

impl ScanOptions {
    /// Whether a file name carries an accepted extension
    #[must_use]
    pub fn accepts(&self, name: &str) -> bool {
        std::path::Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|accepted| *accepted == ext)
            })
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            show_hidden: false,
            extensions: vec!["tsv".into(), "csv".into(), "txt".into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_known_extension() {
        let options = ScanOptions::default();
        assert!(options.accepts("factLending_20240101-20240131.tsv"));
        assert!(options.accepts("orders.csv"));
        assert!(options.accepts("notes.TXT"));
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let options = ScanOptions::default();
        assert!(!options.accepts("archive.zip"));
        assert!(!options.accepts("no_extension"));
        assert!(!options.accepts(".hidden"));
    }

    #[test]
    fn test_custom_extensions() {
        let options = ScanOptions {
            show_hidden: false,
            extensions: vec!["dat".into()],
        };
        assert!(options.accepts("feed.dat"));
        assert!(!options.accepts("feed.tsv"));
    }
}
