//! Share hashing: SHA-256 over the raw share bytes, rendered as lower-case hex.

use sha2::{Digest, Sha256};

use crate::error::CustodyError;

/// Length of a rendered share hash.
pub const SHARE_HASH_HEX_LEN: usize = 64;

/// Compute the lower-case hex SHA-256 of `data`.
pub fn sha256_hex(data: &str) -> String {
    hex::encode(Sha256::digest(data.as_bytes()))
}

/// Recompute the hash of `data` and compare it with the caller's value.
///
/// Comparison is exact, so an upper-case rendering of the right digest is
/// still a mismatch. Returns the computed hash on success.
pub fn verify_sha256_hex(data: &str, supplied: &str) -> Result<String, CustodyError> {
    let computed = sha256_hex(data);
    if computed != supplied {
        return Err(CustodyError::HashMismatch {
            expected: computed,
            supplied: supplied.to_string(),
        });
    }
    Ok(computed)
}
