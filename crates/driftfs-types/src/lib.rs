//! driftfs-types: identifiers, paths, and metadata types shared across
//! the driftfs client crates.
//!
//! Everything in this crate is plain data: no I/O, no locking, no
//! dependency on the mount or store layers.

#[macro_use]
pub mod strong_type;

pub mod entry;
pub mod ids;
pub mod path;

pub use entry::{Entry, EntryAttr};
pub use ids::{Gid, Ino, Signature, Uid};
pub use path::FullPath;
