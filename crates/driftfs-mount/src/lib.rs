//! driftfs-mount: the directory-mutation core of the driftfs FUSE mount.
//!
//! This crate translates kernel directory create/remove calls into
//! requests against the remote metadata store while keeping the local
//! read-through cache and the kernel-facing inode numbering consistent
//! with the remote state under concurrency and partial failure.
//!
//! # Architecture
//!
//! - **[`registry`]** - `InodeRegistry`, the bidirectional map between
//!   kernel inode handles and full paths. Handles are monotonic and never
//!   reused within a mount session.
//!
//! - **[`cache`]** - `MetaCache`, the local mirror of remote entries keyed
//!   by path. Only mutated after the store confirms a mutation.
//!
//! - **[`fence`]** - `SignatureFence`, the per-session replication
//!   signature that tags outgoing mutations and suppresses their echoes.
//!
//! - **[`idmap`]** - `IdMapper`, translation between the local and remote
//!   uid/gid numbering schemes.
//!
//! - **[`filesystem`]** - `MountFs`, the orchestrator exposing `mkdir`,
//!   `rmdir`, and `apply_event` to the kernel dispatch layer. Holds an
//!   `Arc<dyn MetaStoreClient>` for the store boundary.
//!
//! - **[`config`]**, **[`name`]**, **[`error`]** - mount configuration,
//!   entry-name legality, and the kernel-facing error taxonomy.

pub mod cache;
pub mod config;
pub mod error;
pub mod fence;
pub mod filesystem;
pub mod idmap;
pub mod name;
pub mod registry;

pub use cache::MetaCache;
pub use config::MountConfig;
pub use error::{MutationError, MutationResult};
pub use fence::SignatureFence;
pub use filesystem::MountFs;
pub use idmap::IdMapper;
pub use registry::InodeRegistry;
