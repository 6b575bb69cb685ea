//! Replication-signature fencing.
//!
//! Every mutation this session sends carries one fixed signature. The
//! store broadcasts change notifications tagged with the signatures that
//! caused them; a change carrying our own signature was already applied
//! synchronously when the originating call returned, so re-applying it
//! would duplicate the effect. The fence is an idempotence mechanism,
//! not authentication, and the signature is never persisted.

use driftfs_types::Signature;

/// The session's replication signature and the echo filter built on it.
#[derive(Debug, Clone, Copy)]
pub struct SignatureFence {
    own: Signature,
}

impl SignatureFence {
    /// Draws a random signature for a new mount session.
    pub fn new() -> Self {
        SignatureFence {
            own: Signature(rand::random::<i32>()),
        }
    }

    /// Uses a fixed signature. Intended for tests and for replaying a
    /// known session identity.
    pub fn with_signature(own: Signature) -> Self {
        SignatureFence { own }
    }

    /// The signature to tag outgoing mutations with.
    pub fn signature(&self) -> Signature {
        self.own
    }

    /// Whether a notification carrying `signatures` should be applied
    /// locally. False when our own signature is present: the effect is
    /// already committed.
    pub fn should_apply(&self, signatures: &[Signature]) -> bool {
        !signatures.contains(&self.own)
    }
}

impl Default for SignatureFence {
    fn default() -> Self {
        Self::new()
    }
}
