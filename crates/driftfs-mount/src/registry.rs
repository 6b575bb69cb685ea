//! Bidirectional inode-handle ↔ path registry.
//!
//! The kernel addresses entries by numeric handle; the store addresses
//! them by path. The registry owns that bijection for the life of the
//! mount session. Handles are allocated monotonically and never rebound
//! to a different path, so a stale kernel cache can never alias two paths
//! under one handle.

use crate::error::{MutationError, MutationResult};
use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;
use driftfs_types::{FullPath, Ino};
use std::sync::atomic::{AtomicU64, Ordering};

/// Session-scoped bidirectional map between inode handles and paths.
///
/// Both directions are sharded maps, so operations on unrelated paths
/// never contend; `assign` for one path is linearizable against other
/// assigns for the same path via its shard lock.
pub struct InodeRegistry {
    next: AtomicU64,
    path_to_ino: DashMap<FullPath, Ino>,
    ino_to_path: DashMap<Ino, FullPath>,
}

impl InodeRegistry {
    /// Creates a registry with the root path bound to [`Ino::ROOT`].
    pub fn new() -> Self {
        let registry = InodeRegistry {
            next: AtomicU64::new(*Ino::ROOT + 1),
            path_to_ino: DashMap::new(),
            ino_to_path: DashMap::new(),
        };
        registry.path_to_ino.insert(FullPath::root(), Ino::ROOT);
        registry.ino_to_path.insert(Ino::ROOT, FullPath::root());
        registry
    }

    /// Resolves a handle to its path.
    ///
    /// An unknown handle fails with `StaleHandle` whether it expired with
    /// its path or was never issued; callers cannot tell the two apart.
    pub fn resolve(&self, ino: Ino) -> MutationResult<FullPath> {
        self.ino_to_path
            .get(&ino)
            .map(|path| path.clone())
            .ok_or(MutationError::StaleHandle)
    }

    /// Returns the handle bound to `path`, allocating the next monotonic
    /// handle if the path is not yet tracked. Never fails.
    pub fn assign(&self, path: &FullPath) -> Ino {
        match self.path_to_ino.entry(path.clone()) {
            MapEntry::Occupied(bound) => *bound.get(),
            MapEntry::Vacant(slot) => {
                let ino = Ino(self.next.fetch_add(1, Ordering::Relaxed));
                self.ino_to_path.insert(ino, path.clone());
                slot.insert(ino);
                ino
            }
        }
    }

    /// Drops both directions of the binding for `path`. The released
    /// handle is not recycled for the remainder of the session. A path
    /// that is not tracked is a no-op.
    pub fn release(&self, path: &FullPath) {
        if let Some((_, ino)) = self.path_to_ino.remove(path) {
            self.ino_to_path.remove(&ino);
        }
    }

    /// Whether `path` currently has a handle bound.
    pub fn contains(&self, path: &FullPath) -> bool {
        self.path_to_ino.contains_key(path)
    }

    /// Number of live bindings (including the root).
    pub fn len(&self) -> usize {
        self.path_to_ino.len()
    }

    /// Whether no bindings exist. Never true in practice: the root
    /// binding lives as long as the session.
    pub fn is_empty(&self) -> bool {
        self.path_to_ino.is_empty()
    }
}

impl Default for InodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InodeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InodeRegistry")
            .field("bindings", &self.path_to_ino.len())
            .finish()
    }
}
