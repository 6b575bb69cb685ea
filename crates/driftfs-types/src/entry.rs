//! Filesystem entry metadata.
//!
//! An [`Entry`] is the unit of state mirrored from the remote store: one
//! node identified by its full path, with the attribute set the kernel
//! cares about.

use crate::{FullPath, Gid, Uid};
use serde::{Deserialize, Serialize};

/// Attributes of a filesystem node, second-resolution timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryAttr {
    /// Last modification time, unix seconds.
    pub mtime: i64,
    /// Creation time, unix seconds.
    pub crtime: i64,
    /// Full mode word: file-type bits plus permission bits.
    pub mode: u32,
    /// Owner, in the local numbering scheme unless stated otherwise.
    pub uid: Uid,
    /// Group, in the local numbering scheme unless stated otherwise.
    pub gid: Gid,
}

impl EntryAttr {
    /// Builds the attributes for a freshly created directory: directory
    /// type bit, requested permission bits with the session umask cleared,
    /// and both timestamps stamped now.
    pub fn new_directory(requested_mode: u32, umask: u32, uid: Uid, gid: Gid) -> Self {
        let now = unix_now();
        EntryAttr {
            mtime: now,
            crtime: now,
            mode: (libc::S_IFDIR as u32) | (requested_mode & !umask),
            uid,
            gid,
        }
    }

    /// The permission bits without the file-type bits.
    pub fn permissions(&self) -> u32 {
        self.mode & 0o7777
    }
}

/// A filesystem node as known to the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Full path; the unique key of the entry.
    pub path: FullPath,
    /// Whether the node is a directory.
    pub is_directory: bool,
    /// Node attributes.
    pub attr: EntryAttr,
}

impl Entry {
    /// Creates a directory entry at `path` with the given attributes.
    pub fn directory(path: FullPath, attr: EntryAttr) -> Self {
        Entry {
            path,
            is_directory: true,
            attr,
        }
    }

    /// The entry's name (final path segment).
    pub fn name(&self) -> &str {
        self.path.name()
    }
}

/// Current wall-clock time in unix seconds.
pub fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_mode_applies_umask() {
        let attr = EntryAttr::new_directory(0o755, 0o022, Uid(1000), Gid(1000));
        assert_eq!(attr.mode, (libc::S_IFDIR as u32) | 0o755);
        assert_eq!(attr.permissions(), 0o755);

        let masked = EntryAttr::new_directory(0o777, 0o022, Uid(0), Gid(0));
        assert_eq!(masked.permissions(), 0o755);

        let tight = EntryAttr::new_directory(0o777, 0o077, Uid(0), Gid(0));
        assert_eq!(tight.permissions(), 0o700);
    }

    #[test]
    fn test_directory_timestamps_match() {
        let attr = EntryAttr::new_directory(0o755, 0o022, Uid(1), Gid(1));
        assert_eq!(attr.mtime, attr.crtime);
        assert!(attr.mtime > 0);
    }

    #[test]
    fn test_entry_name() {
        let entry = Entry::directory(
            FullPath::new("/home/photos"),
            EntryAttr::new_directory(0o755, 0o022, Uid(1), Gid(1)),
        );
        assert_eq!(entry.name(), "photos");
        assert!(entry.is_directory);
    }
}
