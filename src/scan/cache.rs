//! Bounded directory cache
//!
//! Maps a directory path to its scanned listing so navigating back and forth
//! does not rescan the filesystem. Capacity-bounded: inserting beyond
//! capacity evicts the oldest-inserted entry (FIFO, deliberately not LRU).
//! There is no automatic expiry; staleness after external filesystem changes
//! persists until an explicit invalidate bound to the user refresh action.
//! Lifetime is one browser invocation; the cache is never shared.

use super::error::ScanError;
use super::ordering::{self, SortKey};
use super::types::{Listing, ScanOptions};
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};

/// Default maximum number of cached directories
pub const DEFAULT_CAPACITY: usize = 100;

/// FIFO-bounded cache of directory listings
#[derive(Debug)]
pub struct DirectoryCache {
    capacity: usize,
    listings: HashMap<PathBuf, Listing>,
    // Insertion order, oldest at the front. Re-inserting after an explicit
    // invalidate counts as a fresh insertion.
    order: VecDeque<PathBuf>,
}

impl DirectoryCache {
    /// Create a cache holding at most `capacity` directories
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            listings: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    /// Get the listing for `path`, scanning on a miss
    ///
    /// A fresh scan is name-sorted before it is stored. Scan warnings are
    /// retained with the listing so the controller can surface them on every
    /// visit, not only the first.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ScanError`] if the directory cannot be read.
    /// Failed scans are not cached; a later `get` retries.
    pub fn get(&mut self, path: &Path, options: &ScanOptions) -> Result<&Listing, ScanError> {
        let key = path.to_path_buf();
        if !self.listings.contains_key(&key) {
            let mut listing = super::list_directory(path, options)?;
            ordering::sort_entries(&mut listing.entries, SortKey::Name);
            self.insert(key.clone(), listing);
        }
        Ok(&self.listings[&key])
    }

    /// Drop the cached listing for one directory
    pub fn invalidate(&mut self, path: &Path) {
        if self.listings.remove(path).is_some() {
            self.order.retain(|p| p != path);
        }
    }

    /// Drop every cached listing
    pub fn invalidate_all(&mut self) {
        self.listings.clear();
        self.order.clear();
    }

    /// Whether a listing for `path` is currently cached
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.listings.contains_key(path)
    }

    /// Number of cached directories
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    fn insert(&mut self, key: PathBuf, listing: Listing) {
        if self.listings.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.listings.remove(&oldest);
            }
        }
        self.listings.insert(key.clone(), listing);
        self.order.push_back(key);
    }
}

impl Default for DirectoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
