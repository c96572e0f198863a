//! SHA-256 digests for over-long URL path segments.

use sha2::{Digest, Sha256};

/// Compute SHA-256 of `input` and return the digest as lowercase hex.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
