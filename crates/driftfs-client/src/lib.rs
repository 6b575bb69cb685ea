//! driftfs-client: the boundary to the authoritative remote metadata
//! store.
//!
//! This crate defines the *interface* the mount core consumes: the
//! [`MetaStoreClient`] trait, the typed [`StoreError`] failure reasons,
//! and the [`StoreEvent`] change notifications. It is not a transport. The
//! production transport (connection management, retries, serialization)
//! implements the trait elsewhere; tests implement it in memory.

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{MetaStoreClient, RemoveOptions, StoreEvent};
