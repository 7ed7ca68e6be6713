//! Checksum calculation for activity snapshots.

use sha2::{Digest, Sha256};

use crate::api::Activity;

/// Calculate the SHA-256 checksum of some content.
///
/// # Returns
/// Hexadecimal string representation of the hash.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Checksum of the canonical JSON form of a snapshot.
///
/// Two loads yielding the same activities in the same order share a checksum.
pub fn snapshot_checksum(activities: &[Activity]) -> String {
    let canonical = serde_json::to_string(activities).unwrap_or_default();
    calculate_checksum(&canonical)
}
