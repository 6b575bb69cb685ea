//! Store-boundary error types.
//!
//! Failure reasons are enumerated rather than carried as free text so the
//! mount core never classifies an outcome by matching a message string.

/// A failed request against the remote metadata store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The target directory still has children.
    #[error("directory is not empty")]
    NotEmpty,

    /// The target entry does not exist and the request required it to.
    #[error("entry not found")]
    NotFound,

    /// The store refused the request (uniqueness violation, permissions,
    /// quota). Not classified further at this boundary.
    #[error("request rejected by store: {0}")]
    Rejected(String),

    /// The request never completed (connection, timeout). Retries, if any,
    /// belong to the transport behind the client, not to its callers.
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Convenience result type for store calls.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
