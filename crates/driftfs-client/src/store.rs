//! The remote metadata store client trait and its request/notification
//! types.

use crate::error::StoreResult;
use async_trait::async_trait;
use driftfs_types::{Entry, FullPath, Signature};

/// Client for the authoritative remote metadata store.
///
/// The mount core drives all directory mutations through this trait and
/// trusts its outcomes completely: local state is only touched after a
/// call reports success. Implementations own connection management and
/// retry policy; a failure returned here is terminal for the caller.
#[async_trait]
pub trait MetaStoreClient: Send + Sync + 'static {
    /// Creates `entry` under `parent`. The store enforces name uniqueness
    /// within a directory; concurrent creates for the same name resolve
    /// to exactly one success.
    async fn create_entry(
        &self,
        parent: &FullPath,
        entry: &Entry,
        signature: Signature,
    ) -> StoreResult<()>;

    /// Removes `name` under `parent` according to `options`.
    async fn remove_entry(
        &self,
        parent: &FullPath,
        name: &str,
        options: RemoveOptions,
        signature: Signature,
    ) -> StoreResult<()>;
}

/// Deletion policy for a remove request.
///
/// Every flag is explicit on the wire; in particular
/// `tolerate_recursion_race` documents that recursive deletion is
/// eventually consistent under concurrent removal of descendants, rather
/// than hiding that as swallowed errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveOptions {
    /// Recurse into descendants of the target.
    pub recursive: bool,
    /// Delete the target itself, not only its contents.
    pub delete_self: bool,
    /// A descendant vanishing mid-recursion (removed by a concurrent
    /// actor) does not fail the operation.
    pub tolerate_recursion_race: bool,
    /// A missing target is an error rather than a silent no-op.
    pub require_exists: bool,
}

impl RemoveOptions {
    /// The policy used for kernel-initiated directory removal.
    pub fn directory() -> Self {
        RemoveOptions {
            recursive: true,
            delete_self: true,
            tolerate_recursion_race: true,
            require_exists: true,
        }
    }
}

/// A change notification broadcast by the store to subscribed mounts.
///
/// Carries the signatures of the sessions responsible for the change so a
/// subscriber can fence out its own echoes.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// An entry was created or updated.
    Upserted {
        entry: Entry,
        signatures: Vec<Signature>,
    },
    /// An entry (and, for directories, its subtree) was removed.
    Removed {
        path: FullPath,
        signatures: Vec<Signature>,
    },
}

impl StoreEvent {
    /// Signatures of the sessions that caused this change.
    pub fn signatures(&self) -> &[Signature] {
        match self {
            StoreEvent::Upserted { signatures, .. } => signatures,
            StoreEvent::Removed { signatures, .. } => signatures,
        }
    }
}
