//! Transactional write buffer for a single contract invocation.
//!
//! Writes made during an invocation are buffered here and made visible to
//! later reads within the same invocation. On success the buffered writes
//! are handed back to the ledger as the invocation's write set; on failure
//! they are discarded. The ledger has no delete operation, so the overlay
//! only records sets.

use std::collections::BTreeMap;

/// Write buffer overlaying committed ledger state.
///
/// Uses `BTreeMap` so the write set drains in key order.
#[derive(Debug, Clone, Default)]
pub struct StateOverlay {
    writes: BTreeMap<String, Vec<u8>>,
    /// Total bytes written (keys + values) for enforcing `max_write_bytes`.
    total_write_bytes: u64,
}

impl StateOverlay {
    /// Create a new empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key-value pair, replacing any earlier write to the same key.
    pub fn set(&mut self, key: String, value: Vec<u8>) {
        let new_bytes = (key.len() + value.len()) as u64;
        if let Some(prev) = self.writes.get(&key) {
            let prev_bytes = (key.len() + prev.len()) as u64;
            self.total_write_bytes = self.total_write_bytes.saturating_sub(prev_bytes);
        }
        self.total_write_bytes = self.total_write_bytes.saturating_add(new_bytes);
        self.writes.insert(key, value);
    }

    /// Look up a buffered write. `None` means the caller must check
    /// committed state.
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.writes.get(key).map(Vec::as_slice)
    }

    /// Buffered writes whose keys fall in `[start, end)`, in key order.
    pub fn range(&self, start: &str, end: &str) -> Vec<(String, Vec<u8>)> {
        if start >= end {
            return Vec::new();
        }
        self.writes
            .range::<str, _>((
                std::ops::Bound::Included(start),
                std::ops::Bound::Excluded(end),
            ))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Bytes this overlay would hold after writing `value` at `key`.
    pub fn projected_write_bytes(&self, key: &str, value: &[u8]) -> u64 {
        let prev = self
            .writes
            .get(key)
            .map(|v| (key.len() + v.len()) as u64)
            .unwrap_or(0);
        self.total_write_bytes
            .saturating_sub(prev)
            .saturating_add((key.len() + value.len()) as u64)
    }

    /// Consume the overlay and return all buffered writes in key order.
    pub fn drain(self) -> BTreeMap<String, Vec<u8>> {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Returns the total bytes written (keys + values).
    pub fn total_write_bytes(&self) -> u64 {
        self.total_write_bytes
    }
}
