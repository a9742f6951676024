//! Checksums for migration SQL
//!
//! A migration edited after it was applied is detected by comparing the
//! recorded SHA-256 against the embedded SQL.

use sha2::{Digest, Sha256};

/// Compute the hex SHA-256 of a migration's SQL
pub fn compute_checksum(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
