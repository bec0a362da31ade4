//! Digest primitives used by the security-token scheme.
//!
//! The token format is fixed by the issuing service: MD5 for per-item hashes,
//! SHA-1 for the document-level token, both rendered as lowercase hex. These
//! are deliberately *not* upgraded to stronger primitives — the scheme is a
//! keyless integrity checksum, and any deviation from standard MD5/SHA-1
//! output breaks compatibility with tokens the service has already issued.

use md5::Md5;
use sha1::{Digest as _, Sha1};

/// Compute the MD5 digest of a string as lowercase hexadecimal (32 chars).
///
/// Hashes the UTF-8 bytes of the input.
pub fn md5_hex(input: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    format!("{digest:x}")
}

/// Compute the SHA-1 digest of a string as lowercase hexadecimal (40 chars).
///
/// Hashes the UTF-8 bytes of the input.
pub fn sha1_hex(input: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    format!("{digest:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_hex_empty() {
        // RFC 1321 test vector
        assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_md5_hex_known_value() {
        assert_eq!(md5_hex("1Widget"), "29a08615184b019b94b3c1e2665a37b5");
    }

    #[test]
    fn test_sha1_hex_empty() {
        assert_eq!(sha1_hex(""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn test_sha1_hex_known_value() {
        // Known SHA-1 of "abc"
        assert_eq!(sha1_hex("abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_output_is_lowercase_hex() {
        let digest = sha1_hex("Case Sensitivity Check");
        assert_eq!(digest.len(), 40);
        assert!(
            digest
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }
}
