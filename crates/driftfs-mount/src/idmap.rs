//! Owner/group identifier translation.
//!
//! The remote store serves mounts whose local uid/gid numbering may not
//! match the store's. Outgoing entries are translated to the remote
//! scheme before the wire call and back to the local scheme before
//! anything is returned to the kernel or cached.

use driftfs_types::{Entry, Gid, Uid};
use std::collections::HashMap;

/// Table-driven uid/gid translation between the local and remote
/// numbering schemes. Identifiers without a table entry pass through
/// unchanged, so the default mapper is the identity.
#[derive(Debug, Clone, Default)]
pub struct IdMapper {
    uid_local_to_remote: HashMap<Uid, Uid>,
    uid_remote_to_local: HashMap<Uid, Uid>,
    gid_local_to_remote: HashMap<Gid, Gid>,
    gid_remote_to_local: HashMap<Gid, Gid>,
}

impl IdMapper {
    /// The identity mapping.
    pub fn identity() -> Self {
        IdMapper::default()
    }

    /// Adds a uid pair to the translation table.
    pub fn with_uid(mut self, local: Uid, remote: Uid) -> Self {
        self.uid_local_to_remote.insert(local, remote);
        self.uid_remote_to_local.insert(remote, local);
        self
    }

    /// Adds a gid pair to the translation table.
    pub fn with_gid(mut self, local: Gid, remote: Gid) -> Self {
        self.gid_local_to_remote.insert(local, remote);
        self.gid_remote_to_local.insert(remote, local);
        self
    }

    /// Rewrites `entry`'s owner/group into the remote scheme.
    pub fn map_to_remote(&self, entry: &mut Entry) {
        entry.attr.uid = lookup(&self.uid_local_to_remote, entry.attr.uid);
        entry.attr.gid = lookup(&self.gid_local_to_remote, entry.attr.gid);
    }

    /// Rewrites `entry`'s owner/group back into the local scheme.
    pub fn map_to_local(&self, entry: &mut Entry) {
        entry.attr.uid = lookup(&self.uid_remote_to_local, entry.attr.uid);
        entry.attr.gid = lookup(&self.gid_remote_to_local, entry.attr.gid);
    }
}

fn lookup<K: std::hash::Hash + Eq + Copy>(table: &HashMap<K, K>, id: K) -> K {
    table.get(&id).copied().unwrap_or(id)
}
