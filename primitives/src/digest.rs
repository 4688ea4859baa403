//! Write-set commitment.
//!
//! The digest is BLAKE3 over the ordered write set with length-prefixed
//! keys and values (u32 little-endian lengths), so two invocations that
//! produce the same writes always produce the same digest.

use std::collections::BTreeMap;

use crate::types::{Hash, ZERO_HASH};

/// Commitment over a write set. Returns `ZERO_HASH` for an empty set.
pub fn write_set_digest(writes: &BTreeMap<String, Vec<u8>>) -> Hash {
    if writes.is_empty() {
        return ZERO_HASH;
    }
    let mut hasher = blake3::Hasher::new();
    for (key, value) in writes {
        hasher.update(&(key.len() as u32).to_le_bytes());
        hasher.update(key.as_bytes());
        hasher.update(&(value.len() as u32).to_le_bytes());
        hasher.update(value);
    }
    *hasher.finalize().as_bytes()
}
