//! Entry-name legality.

use crate::error::{MutationError, MutationResult};

/// Longest accepted entry name, in bytes.
pub const MAX_NAME_LEN: usize = 255;

/// Checks whether `name` is legal as a single directory-entry name.
///
/// Rejected: the empty string, the relative pseudo-entries `.` and `..`,
/// anything containing a slash or a NUL byte, and names longer than
/// [`MAX_NAME_LEN`]. Runs before any remote call; an illegal name never
/// leaves the client.
pub fn check_name(name: &str) -> MutationResult<()> {
    if name.is_empty() || name == "." || name == ".." {
        return Err(MutationError::InvalidName);
    }
    if name.len() > MAX_NAME_LEN {
        return Err(MutationError::InvalidName);
    }
    if name.bytes().any(|b| b == b'/' || b == 0) {
        return Err(MutationError::InvalidName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_names() {
        for name in ["photos", "a", ".hidden", "with space", "päivä", "a.b.c"] {
            assert!(check_name(name).is_ok(), "{name:?} should be legal");
        }
    }

    #[test]
    fn test_illegal_names() {
        for name in ["", ".", "..", "a/b", "/", "nul\0byte"] {
            assert_eq!(
                check_name(name),
                Err(MutationError::InvalidName),
                "{name:?} should be illegal"
            );
        }
    }

    #[test]
    fn test_length_bound() {
        let just_fits = "x".repeat(MAX_NAME_LEN);
        assert!(check_name(&just_fits).is_ok());

        let too_long = "x".repeat(MAX_NAME_LEN + 1);
        assert_eq!(check_name(&too_long), Err(MutationError::InvalidName));
    }
}
