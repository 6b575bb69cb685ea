//! Kernel-facing error taxonomy for directory mutations.
//!
//! Validation failures never reach the remote store; remote failures are
//! classified only as far as the kernel caller needs (empty/not-empty,
//! exists/not-exists). Every call ends in exactly one terminal outcome.

/// A failed directory mutation, as reported to the kernel dispatch layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MutationError {
    /// The entry name fails the legality check. No remote call was made.
    #[error("illegal entry name")]
    InvalidName,

    /// Self-reference removal (`rmdir` of `.`). No remote call was made.
    #[error("invalid argument")]
    InvalidArgument,

    /// The directory has children, or is the parent-reference
    /// pseudo-entry `..`.
    #[error("directory is not empty")]
    NotEmpty,

    /// The inode handle is not tracked by the registry. Expired and
    /// fabricated handles are deliberately indistinguishable.
    #[error("stale inode handle")]
    StaleHandle,

    /// The remote target is missing, or the remove failed for a reason
    /// this layer does not classify further.
    #[error("entry not found")]
    NotFound,

    /// The remote create call failed. Create failures are not classified
    /// further; only remove distinguishes error kinds.
    #[error("remote store call failed")]
    IOFailure,

    /// The caller cancelled the wait. The dispatched remote request is
    /// not aborted; its outcome is still committed in the background.
    #[error("interrupted")]
    Interrupted,
}

impl MutationError {
    /// The POSIX errno the kernel dispatch layer forwards for this error.
    pub fn errno(&self) -> i32 {
        match self {
            MutationError::InvalidName => libc::EINVAL,
            MutationError::InvalidArgument => libc::EINVAL,
            MutationError::NotEmpty => libc::ENOTEMPTY,
            MutationError::StaleHandle => libc::ESTALE,
            MutationError::NotFound => libc::ENOENT,
            MutationError::IOFailure => libc::EIO,
            MutationError::Interrupted => libc::EINTR,
        }
    }
}

/// Convenience result type for mutation calls.
pub type MutationResult<T> = std::result::Result<T, MutationError>;
