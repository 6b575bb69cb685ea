strong_type!(
    /// A kernel-facing inode handle. Session-scoped: bound to exactly one
    /// path for its lifetime and never reused for another path within the
    /// same mount session.
    Ino,
    u64
);
strong_type!(
    /// A user identifier in either the local or the remote numbering scheme.
    Uid,
    u32
);
strong_type!(
    /// A group identifier in either the local or the remote numbering scheme.
    Gid,
    u32
);
strong_type!(
    /// The per-session replication signature carried on every mutation,
    /// used to fence out self-originated change echoes. Not a credential.
    Signature,
    i32
);

impl Ino {
    /// Reserved handle for the mount root (FUSE convention).
    pub const ROOT: Ino = Ino(1);
}
