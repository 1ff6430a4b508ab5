//! Testing utilities for loadr
//!
//! Provides a `TempTree` fixture for building throwaway directory trees with
//! data files and table-definition documents.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree that cleans up on drop
///
/// # Examples
/// ```ignore
/// let tree = TempTree::new();
/// let file = tree.file("orders_2024-05.tsv", "id\tamount\n");
/// assert!(file.exists());
/// // Tree removed when `tree` is dropped
/// ```
pub struct TempTree {
    dir: TempDir,
}

impl TempTree {
    /// Create a fresh temporary tree
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp directory"),
        }
    }

    /// Root path of the tree
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file with text content, returning its path
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        self.file_bytes(name, contents.as_bytes())
    }

    /// Create a file with raw bytes, returning its path
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn file_bytes(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("failed to write test file");
        path
    }

    /// Create a subdirectory, returning its path
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    pub fn dir(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::create_dir_all(&path).expect("failed to create test directory");
        path
    }
}

impl Default for TempTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_creates_files_and_dirs() {
        let tree = TempTree::new();
        let file = tree.file("data.tsv", "a\tb\n");
        let sub = tree.dir("sub");

        assert!(file.is_file());
        assert!(sub.is_dir());
        assert_eq!(fs::read_to_string(&file).unwrap(), "a\tb\n");
    }

    #[test]
    fn test_tree_cleans_up_on_drop() {
        let root;
        {
            let tree = TempTree::new();
            root = tree.path().to_path_buf();
            tree.file("data.tsv", "x\n");
            assert!(root.exists());
        }
        assert!(!root.exists());
    }
}
