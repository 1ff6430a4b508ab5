//! Pure sorting and filtering over entry lists
//!
//! These functions are stateless and never touch the cache; the session hands
//! them a cloned listing each render cycle.

use super::types::FileEntry;
use std::cmp::Ordering;

/// Sort key for the file portion of a listing
///
/// Directories always sort before files, case-insensitively by name,
/// regardless of the active key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Case-insensitive ascending by name
    #[default]
    Name,
    /// Descending by size, ties by ascending name
    Size,
    /// Descending by modification time, ties by ascending name
    Date,
}

impl SortKey {
    /// The next key in the cycle Name → Size → Date → Name
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Size,
            Self::Size => Self::Date,
            Self::Date => Self::Name,
        }
    }

    /// Short label for the status line
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Size => "size",
            Self::Date => "date",
        }
    }
}

fn name_key(entry: &FileEntry) -> String {
    entry.name.to_lowercase()
}

/// Sort entries in place
///
/// Directories first (case-insensitive ascending by name), then files ordered
/// by `key` with the tie-breaks documented on [`SortKey`].
pub fn sort_entries(entries: &mut [FileEntry], key: SortKey) {
    entries.sort_by(|a, b| match (a.is_dir(), b.is_dir()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => name_key(a).cmp(&name_key(b)),
        (false, false) => match key {
            SortKey::Name => name_key(a).cmp(&name_key(b)),
            SortKey::Size => b
                .size
                .cmp(&a.size)
                .then_with(|| name_key(a).cmp(&name_key(b))),
            SortKey::Date => b
                .modified
                .cmp(&a.modified)
                .then_with(|| name_key(a).cmp(&name_key(b))),
        },
    });
}

/// Narrow entries by a case-insensitive substring on the name
///
/// Empty `text` is the identity. Directories are always retained so
/// navigation stays possible while a filter is active.
#[must_use]
pub fn filter_entries(entries: &[FileEntry], text: &str) -> Vec<FileEntry> {
    if text.is_empty() {
        return entries.to_vec();
    }
    let needle = text.to_lowercase();
    entries
        .iter()
        .filter(|e| e.is_dir() || e.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::types::EntryKind;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime};

    fn entry(name: &str, kind: EntryKind, size: u64, age_secs: u64) -> FileEntry {
        FileEntry {
            path: PathBuf::from(format!("/data/{name}")),
            name: name.to_string(),
            kind,
            size,
            modified: SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000 - age_secs),
            link_target: None,
        }
    }

    fn names(entries: &[FileEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_directories_always_first() {
        let mut entries = vec![
            entry("zed.tsv", EntryKind::RegularFile, 10, 0),
            entry("Beta", EntryKind::Directory, 0, 0),
            entry("alpha", EntryKind::Directory, 0, 0),
            entry("a.tsv", EntryKind::RegularFile, 5, 0),
        ];

        for key in [SortKey::Name, SortKey::Size, SortKey::Date] {
            sort_entries(&mut entries, key);
            assert_eq!(&names(&entries)[..2], &["alpha", "Beta"], "key {key:?}");
        }
    }

    #[test]
    fn test_sort_by_name_case_insensitive() {
        let mut entries = vec![
            entry("c_2024-01.tsv", EntryKind::RegularFile, 1, 0),
            entry("B.tsv", EntryKind::RegularFile, 2, 0),
            entry("a.tsv", EntryKind::RegularFile, 3, 0),
        ];
        sort_entries(&mut entries, SortKey::Name);
        assert_eq!(names(&entries), vec!["a.tsv", "B.tsv", "c_2024-01.tsv"]);
    }

    #[test]
    fn test_sort_by_size_descending_name_tiebreak() {
        let mut entries = vec![
            entry("small.tsv", EntryKind::RegularFile, 10, 0),
            entry("big.tsv", EntryKind::RegularFile, 1000, 0),
            entry("b_same.tsv", EntryKind::RegularFile, 50, 0),
            entry("a_same.tsv", EntryKind::RegularFile, 50, 0),
        ];
        sort_entries(&mut entries, SortKey::Size);
        assert_eq!(
            names(&entries),
            vec!["big.tsv", "a_same.tsv", "b_same.tsv", "small.tsv"]
        );
    }

    #[test]
    fn test_sort_by_date_descending_name_tiebreak() {
        let mut entries = vec![
            entry("old.tsv", EntryKind::RegularFile, 1, 3600),
            entry("new.tsv", EntryKind::RegularFile, 1, 0),
            entry("b_tied.tsv", EntryKind::RegularFile, 1, 60),
            entry("a_tied.tsv", EntryKind::RegularFile, 1, 60),
        ];
        sort_entries(&mut entries, SortKey::Date);
        assert_eq!(
            names(&entries),
            vec!["new.tsv", "a_tied.tsv", "b_tied.tsv", "old.tsv"]
        );
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let entries = vec![
            entry("factLending_202401.tsv", EntryKind::RegularFile, 1, 0),
            entry("orders.tsv", EntryKind::RegularFile, 1, 0),
        ];
        let narrowed = filter_entries(&entries, "LENDING");
        assert_eq!(names(&narrowed), vec!["factLending_202401.tsv"]);
    }

    #[test]
    fn test_filter_empty_text_is_identity() {
        let entries = vec![
            entry("a.tsv", EntryKind::RegularFile, 1, 0),
            entry("b.tsv", EntryKind::RegularFile, 1, 0),
        ];
        assert_eq!(filter_entries(&entries, "").len(), 2);
    }

    #[test]
    fn test_filter_retains_directories() {
        let entries = vec![
            entry("archive", EntryKind::Directory, 0, 0),
            entry("orders.tsv", EntryKind::RegularFile, 1, 0),
        ];
        let narrowed = filter_entries(&entries, "nomatch");
        assert_eq!(names(&narrowed), vec!["archive"]);
    }
}
