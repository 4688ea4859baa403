//! Committed ledger state abstraction.
//!
//! `StateStore` is the substrate's view of committed state: point lookups
//! and lexical range scans. The per-invocation host layers a write overlay
//! on top of it, so reads within one invocation see that invocation's
//! earlier writes.
//!
//! Range scans hand out a `RangeCursor`, which holds a substrate resource
//! and must be closed. Wrap it in a [`ScanGuard`] so it is closed on every
//! exit path, early returns and `?` included.
//!
//! Implementations:
//! - `MemStore` (this crate): in-memory BTreeMap for tests and demos

use tracing::warn;

use crate::error::HostError;

/// A `(key, value)` pair yielded by a range scan.
pub type Entry = (String, Vec<u8>);

/// An open, ordered iteration over a key interval.
pub trait RangeCursor {
    /// Advance the cursor. Returns `None` once exhausted.
    fn next_entry(&mut self) -> Option<Result<Entry, HostError>>;

    /// Release the underlying resource. Must be idempotent.
    fn close(&mut self) -> Result<(), HostError>;
}

/// Abstraction over committed ledger state.
///
/// Implementations must be deterministic: the same key always returns the
/// same value for a given state snapshot, and range scans yield keys in
/// ascending lexical order.
pub trait StateStore: Send + Sync {
    /// Get the value for a key. Returns `Ok(None)` if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, HostError>;

    /// Check if a key exists.
    ///
    /// Default implementation uses `get()`, but backends may optimize this.
    fn contains(&self, key: &str) -> Result<bool, HostError> {
        Ok(self.get(key)?.is_some())
    }

    /// Open a cursor over all keys in `[start, end)`.
    fn range<'a>(&'a self, start: &str, end: &str)
        -> Result<Box<dyn RangeCursor + 'a>, HostError>;
}

/// Owns a range cursor and closes it when dropped.
///
/// Iterating yields `Result<Entry, HostError>`. Call [`close`](Self::close)
/// to observe close errors; dropping closes silently (failures are logged).
pub struct ScanGuard<'a> {
    cursor: Option<Box<dyn RangeCursor + 'a>>,
}

impl<'a> ScanGuard<'a> {
    pub fn new(cursor: Box<dyn RangeCursor + 'a>) -> Self {
        Self {
            cursor: Some(cursor),
        }
    }

    /// Close the cursor and report any error.
    pub fn close(mut self) -> Result<(), HostError> {
        match self.cursor.take() {
            Some(mut cursor) => cursor.close(),
            None => Ok(()),
        }
    }
}

impl Iterator for ScanGuard<'_> {
    type Item = Result<Entry, HostError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.as_mut()?.next_entry()
    }
}

impl Drop for ScanGuard<'_> {
    fn drop(&mut self) {
        if let Some(mut cursor) = self.cursor.take() {
            if let Err(err) = cursor.close() {
                warn!(error = %err, "failed to close range cursor");
            }
        }
    }
}
