//! Local metadata cache.
//!
//! A read-through mirror of remote entries for paths this session has
//! observed. The mutation protocol writes to it strictly after the store
//! confirms an operation, never speculatively and never on failure, so
//! the cache can be trusted to lag the store but never to lead it.

use dashmap::DashMap;
use driftfs_types::{Entry, FullPath};

/// Path-keyed cache of remote entries.
///
/// Backed by a sharded map: writes exclude each other per shard, and
/// operations on unrelated paths do not serialize.
pub struct MetaCache {
    entries: DashMap<FullPath, Entry>,
}

impl MetaCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        MetaCache {
            entries: DashMap::new(),
        }
    }

    /// Upserts `entry` at its path, overwriting any prior snapshot.
    pub fn insert(&self, entry: Entry) {
        self.entries.insert(entry.path.clone(), entry);
    }

    /// Removes the entry at `path` and every descendant.
    ///
    /// Directory removal is recursive at the store, so the whole local
    /// subtree must go with it or the cache would retain orphans.
    pub fn delete(&self, path: &FullPath) {
        self.entries
            .retain(|key, _| key != path && !path.is_ancestor_of(key));
    }

    /// Returns a snapshot of the entry at `path`, if cached.
    pub fn lookup(&self, path: &FullPath) -> Option<Entry> {
        self.entries.get(path).map(|entry| entry.clone())
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MetaCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MetaCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetaCache")
            .field("entries", &self.entries.len())
            .finish()
    }
}
