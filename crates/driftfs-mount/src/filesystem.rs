//! Directory mutation protocols.
//!
//! `MountFs` is the orchestrator between the kernel dispatch layer and
//! the remote metadata store. Each operation follows the same shape:
//! validate locally, resolve the parent handle through the registry,
//! drive the store, and commit a confirmed outcome into the cache and
//! registry. Local state is only ever mutated after the store reports
//! success; a failed or ambiguous call leaves it untouched.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use driftfs_client::{MetaStoreClient, RemoveOptions, StoreError, StoreEvent};
use driftfs_types::{Entry, EntryAttr, FullPath, Gid, Ino, Uid};

use crate::cache::MetaCache;
use crate::config::MountConfig;
use crate::error::{MutationError, MutationResult};
use crate::fence::SignatureFence;
use crate::idmap::IdMapper;
use crate::name::check_name;
use crate::registry::InodeRegistry;

/// The directory-mutation core of one mount session.
///
/// Shared across all concurrent kernel calls; the registry and cache it
/// owns are sharded structures, so operations on unrelated paths do not
/// serialize.
pub struct MountFs {
    store: Arc<dyn MetaStoreClient>,
    config: Arc<MountConfig>,
    registry: Arc<InodeRegistry>,
    cache: Arc<MetaCache>,
    idmap: Arc<IdMapper>,
    fence: SignatureFence,
}

impl MountFs {
    /// Creates a mount core over `store` with a freshly drawn session
    /// signature.
    pub fn new(store: Arc<dyn MetaStoreClient>, config: MountConfig) -> Self {
        Self::with_fence(store, config, SignatureFence::new())
    }

    /// Creates a mount core with a caller-provided fence. Used by tests
    /// and by embedders that manage session identity themselves.
    pub fn with_fence(
        store: Arc<dyn MetaStoreClient>,
        config: MountConfig,
        fence: SignatureFence,
    ) -> Self {
        MountFs {
            store,
            config: Arc::new(config),
            registry: Arc::new(InodeRegistry::new()),
            cache: Arc::new(MetaCache::new()),
            idmap: Arc::new(IdMapper::identity()),
            fence,
        }
    }

    /// Replaces the identifier translation tables.
    pub fn with_id_mapper(mut self, idmap: IdMapper) -> Self {
        self.idmap = Arc::new(idmap);
        self
    }

    /// The session's replication signature.
    pub fn signature(&self) -> driftfs_types::Signature {
        self.fence.signature()
    }

    /// The local metadata cache.
    pub fn cache(&self) -> &MetaCache {
        &self.cache
    }

    /// The inode registry.
    pub fn registry(&self) -> &InodeRegistry {
        &self.registry
    }

    /// The mount configuration.
    pub fn config(&self) -> &MountConfig {
        &self.config
    }

    /// Creates the directory `name` under `parent`.
    ///
    /// Validation failures (`InvalidName`, `StaleHandle`) are resolved
    /// locally with no remote call. The store enforces name uniqueness;
    /// there is no local existence pre-check, so racing creates resolve
    /// to exactly one success and the loser sees `IOFailure`.
    ///
    /// `cancel` bounds only the wait: the dispatched remote request is
    /// not aborted, and its outcome is still committed by the background
    /// task after an `Interrupted` return.
    pub async fn mkdir(
        &self,
        parent: Ino,
        name: &str,
        mode: u32,
        uid: Uid,
        gid: Gid,
        cancel: CancellationToken,
    ) -> MutationResult<(Ino, Entry)> {
        check_name(name)?;
        let parent_path = self.registry.resolve(parent)?;
        let path = parent_path.child(name);
        debug!(%path, mode, "mkdir");

        let attr = EntryAttr::new_directory(mode, self.config.umask, uid, gid);
        let entry = Entry::directory(path, attr);

        let mut task = self.dispatch_create(parent_path, entry);
        tokio::select! {
            joined = &mut task => joined.unwrap_or(Err(MutationError::IOFailure)),
            _ = cancel.cancelled() => Err(MutationError::Interrupted),
        }
    }

    /// Removes the directory `name` under `parent`.
    ///
    /// `.` is refused outright; `..` is refused as non-empty, which is
    /// what the kernel expects for the parent-reference pseudo-entry.
    /// Remote failures are classified no further than the kernel needs:
    /// non-empty stays `NotEmpty`, everything else becomes `NotFound`.
    pub async fn rmdir(
        &self,
        parent: Ino,
        name: &str,
        cancel: CancellationToken,
    ) -> MutationResult<()> {
        if name == "." {
            return Err(MutationError::InvalidArgument);
        }
        if name == ".." {
            return Err(MutationError::NotEmpty);
        }

        let parent_path = self.registry.resolve(parent)?;
        let path = parent_path.child(name);
        debug!(%path, "rmdir");

        let mut task = self.dispatch_remove(parent_path, name.to_string(), path);
        tokio::select! {
            joined = &mut task => joined.unwrap_or(Err(MutationError::NotFound)),
            _ = cancel.cancelled() => Err(MutationError::Interrupted),
        }
    }

    /// Applies a store change notification to local state.
    ///
    /// Events tagged with this session's signature are suppressed: their
    /// effect was committed synchronously when the originating call
    /// returned, and applying the echo would duplicate it. Foreign
    /// removes purge the subtree and release its handle; foreign upserts
    /// refresh the cache, but only for paths whose parent this session
    /// has already observed. Unobserved subtrees stay uncached until
    /// read.
    pub fn apply_event(&self, event: StoreEvent) {
        if !self.fence.should_apply(event.signatures()) {
            debug!("suppressed self-originated store event");
            return;
        }

        match event {
            StoreEvent::Upserted { entry, .. } => {
                let mut entry = entry;
                let parent_observed = match entry.path.parent() {
                    Some(parent) => {
                        parent.is_root()
                            || self.registry.contains(&parent)
                            || self.cache.lookup(&parent).is_some()
                    }
                    None => false,
                };
                if !parent_observed {
                    debug!(path = %entry.path, "ignored upsert below unobserved parent");
                    return;
                }
                self.idmap.map_to_local(&mut entry);
                debug!(path = %entry.path, "applied foreign upsert");
                self.cache.insert(entry);
            }
            StoreEvent::Removed { path, .. } => {
                debug!(%path, "applied foreign remove");
                self.cache.delete(&path);
                self.registry.release(&path);
            }
        }
    }

    /// Runs the remote create and, on success, the local commit on a
    /// detached task, so a caller that stopped waiting cannot leave the
    /// cache out of sync with a mutation the store actually applied.
    fn dispatch_create(
        &self,
        parent: FullPath,
        entry: Entry,
    ) -> JoinHandle<MutationResult<(Ino, Entry)>> {
        let store = Arc::clone(&self.store);
        let cache = Arc::clone(&self.cache);
        let registry = Arc::clone(&self.registry);
        let idmap = Arc::clone(&self.idmap);
        let signature = self.fence.signature();

        tokio::spawn(async move {
            let mut entry = entry;
            idmap.map_to_remote(&mut entry);
            let outcome = store.create_entry(&parent, &entry, signature).await;
            idmap.map_to_local(&mut entry);

            match outcome {
                Ok(()) => {
                    cache.insert(entry.clone());
                    let ino = registry.assign(&entry.path);
                    Ok((ino, entry))
                }
                Err(err) => {
                    warn!(path = %entry.path, error = %err, "mkdir rejected by store");
                    Err(MutationError::IOFailure)
                }
            }
        })
    }

    /// Remove-side counterpart of [`Self::dispatch_create`].
    fn dispatch_remove(
        &self,
        parent: FullPath,
        name: String,
        path: FullPath,
    ) -> JoinHandle<MutationResult<()>> {
        let store = Arc::clone(&self.store);
        let cache = Arc::clone(&self.cache);
        let registry = Arc::clone(&self.registry);
        let signature = self.fence.signature();

        tokio::spawn(async move {
            let outcome = store
                .remove_entry(&parent, &name, RemoveOptions::directory(), signature)
                .await;

            match outcome {
                Ok(()) => {
                    cache.delete(&path);
                    registry.release(&path);
                    Ok(())
                }
                Err(StoreError::NotEmpty) => {
                    debug!(%path, "rmdir refused: directory not empty");
                    Err(MutationError::NotEmpty)
                }
                Err(err) => {
                    warn!(%path, error = %err, "rmdir failed at store");
                    Err(MutationError::NotFound)
                }
            }
        })
    }
}

impl std::fmt::Debug for MountFs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountFs")
            .field("signature", &self.fence.signature())
            .field("cached_entries", &self.cache.len())
            .field("bound_handles", &self.registry.len())
            .finish()
    }
}
