//! Canonical hierarchical paths.
//!
//! Entries in the remote store are addressed by full path, not by inode,
//! so the path type is the primary key everywhere: cache entries, registry
//! bindings, and store requests all use `FullPath`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An absolute, slash-delimited, normalized path.
///
/// Invariants: always starts with `/`, never ends with `/` (except the
/// root itself), and contains no empty segments. Two live entries never
/// share a `FullPath`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FullPath(String);

impl FullPath {
    /// The filesystem root, `/`.
    pub fn root() -> Self {
        FullPath("/".to_string())
    }

    /// Builds a path from a raw string, normalizing trailing slashes and
    /// collapsing empty segments.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let mut normalized = String::with_capacity(raw.len() + 1);
        normalized.push('/');
        for segment in raw.split('/').filter(|s| !s.is_empty()) {
            if !normalized.ends_with('/') {
                normalized.push('/');
            }
            normalized.push_str(segment);
        }
        FullPath(normalized)
    }

    /// Returns the path of `name` directly under `self`.
    pub fn child(&self, name: &str) -> FullPath {
        if self.is_root() {
            FullPath(format!("/{name}"))
        } else {
            FullPath(format!("{}/{name}", self.0))
        }
    }

    /// Returns the parent path, or `None` for the root.
    pub fn parent(&self) -> Option<FullPath> {
        if self.is_root() {
            return None;
        }
        match self.0.rfind('/') {
            Some(0) => Some(FullPath::root()),
            Some(idx) => Some(FullPath(self.0[..idx].to_string())),
            None => None,
        }
    }

    /// Returns the final path segment (empty for the root).
    pub fn name(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[idx + 1..],
            None => "",
        }
    }

    /// Whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Whether `other` lies strictly below `self` in the hierarchy.
    ///
    /// `/a` is an ancestor of `/a/b` and `/a/b/c`, but not of `/a` itself
    /// and not of `/ab` (segment boundaries matter).
    pub fn is_ancestor_of(&self, other: &FullPath) -> bool {
        if self.is_root() {
            return !other.is_root();
        }
        other.0.len() > self.0.len()
            && other.0.starts_with(&self.0)
            && other.0.as_bytes()[self.0.len()] == b'/'
    }

    /// The path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FullPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for FullPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FullPath({})", self.0)
    }
}

impl From<&str> for FullPath {
    fn from(raw: &str) -> Self {
        FullPath::new(raw)
    }
}
