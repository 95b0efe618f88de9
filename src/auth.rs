//! Password digests.
//!
//! Plaintext credentials are never stored; the users table keeps a
//! SHA-256 hex digest instead. The digest is deterministic and unsalted
//! so that login can compare by exact match against previously stored
//! values. This is deliberately compatible with existing data and is
//! not a hardened password scheme.

use sha2::{Digest, Sha256};

/// Compute the hex digest stored in place of a plaintext password.
///
/// Same input always yields the same 64-character lowercase hex string.
pub fn digest(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(digest("hunter2"), digest("hunter2"));
    }

    #[test]
    fn test_digest_known_vector() {
        // SHA-256 of "password"
        assert_eq!(
            digest("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn test_digest_is_fixed_length_hex() {
        let d = digest("");
        assert_eq!(d.len(), 64);
        assert!(d.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_distinct_inputs_differ() {
        assert_ne!(digest("alice"), digest("bob"));
    }
}
