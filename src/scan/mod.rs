//! Directory scanning
//!
//! Lists a single directory's entries with type/size/time metadata. A failure
//! to stat one entry is recorded as a warning and the entry is skipped; only a
//! directory that cannot be opened at all is an error. Symlink metadata is
//! taken from the link itself (lstat semantics) so recursive symlinks cannot
//! send the scanner into a cycle; the resolved target is attached for display
//! only.

pub mod cache;
pub mod error;
pub mod ordering;
pub mod types;

pub use cache::DirectoryCache;
pub use error::ScanError;
pub use ordering::SortKey;
pub use types::{EntryKind, FileEntry, Listing, ScanOptions, ScanWarning};

use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Scan one directory
///
/// Includes directories, and files (or symlinks) whose name carries an
/// accepted extension. Hidden entries (leading dot) are excluded unless
/// `options.show_hidden` is set. Entries are returned in filesystem order;
/// callers sort as needed.
///
/// # Errors
///
/// Returns [`ScanError::Unreadable`] if the directory cannot be opened and
/// [`ScanError::NotADirectory`] if `path` is not a directory. Per-entry
/// failures never produce an `Err`.
pub fn list_directory(path: &Path, options: &ScanOptions) -> Result<Listing, ScanError> {
    let read_dir = fs::read_dir(path).map_err(|source| {
        if path.is_file() {
            ScanError::NotADirectory(path.to_path_buf())
        } else {
            ScanError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let mut listing = Listing::default();

    for entry in read_dir {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                listing.warnings.push(ScanWarning {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                });
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if !options.show_hidden && name.starts_with('.') {
            continue;
        }

        // DirEntry::metadata does not traverse symlinks, matching lstat.
        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                listing.warnings.push(ScanWarning {
                    path: entry.path(),
                    message: e.to_string(),
                });
                continue;
            }
        };

        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else if metadata.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::RegularFile
        };

        if kind != EntryKind::Directory && !options.accepts(&name) {
            continue;
        }

        let link_target = if kind == EntryKind::Symlink {
            fs::read_link(entry.path()).ok()
        } else {
            None
        };

        listing.entries.push(FileEntry {
            path: entry.path(),
            name,
            kind,
            size: metadata.len(),
            modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            link_target,
        });
    }

    Ok(listing)
}
