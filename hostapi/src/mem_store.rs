//! In-memory state store for testing.
//!
//! `MemStore` implements `StateStore` using a `BTreeMap` for deterministic
//! key ordering. It also counts open range cursors so tests can check that
//! every scan releases its cursor, and can inject a cursor fault to drive
//! mid-scan error paths.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use drugtrace_primitives::types::in_scan_window;

use crate::error::HostError;
use crate::state_store::{Entry, RangeCursor, StateStore};

/// In-memory state store backed by `BTreeMap`.
#[derive(Debug, Default)]
pub struct MemStore {
    data: BTreeMap<String, Vec<u8>>,
    open_cursors: Arc<AtomicUsize>,
    /// When set, cursors fail after yielding this many entries.
    cursor_fault_after: Option<usize>,
}

impl MemStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key-value pair directly into committed state.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.data.insert(key.into(), value.into());
    }

    /// Apply an invocation's write set to committed state.
    pub fn commit(&mut self, writes: BTreeMap<String, Vec<u8>>) {
        self.data.extend(writes);
    }

    /// Make every subsequently opened cursor fail after `after` entries.
    pub fn inject_cursor_fault(&mut self, after: usize) {
        self.cursor_fault_after = Some(after);
    }

    /// Number of range cursors opened and not yet closed.
    pub fn open_cursors(&self) -> usize {
        self.open_cursors.load(Ordering::SeqCst)
    }

    /// Access committed state for assertions.
    pub fn data(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl StateStore for MemStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, HostError> {
        Ok(self.data.get(key).cloned())
    }

    fn contains(&self, key: &str) -> Result<bool, HostError> {
        Ok(self.data.contains_key(key))
    }

    fn range<'a>(
        &'a self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn RangeCursor + 'a>, HostError> {
        let entries: Vec<Entry> = self
            .data
            .range::<str, _>((Bound::Included(start), Bound::Unbounded))
            .take_while(|(k, _)| in_scan_window(k, start, end))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        self.open_cursors.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemCursor {
            entries: entries.into_iter(),
            yielded: 0,
            fault_after: self.cursor_fault_after,
            open_cursors: Arc::clone(&self.open_cursors),
            closed: false,
        }))
    }
}

/// Cursor over a snapshot of a `MemStore` key interval.
struct MemCursor {
    entries: std::vec::IntoIter<Entry>,
    yielded: usize,
    fault_after: Option<usize>,
    open_cursors: Arc<AtomicUsize>,
    closed: bool,
}

impl RangeCursor for MemCursor {
    fn next_entry(&mut self) -> Option<Result<Entry, HostError>> {
        if self.closed {
            return Some(Err(HostError::cursor("cursor already closed")));
        }
        if self.fault_after == Some(self.yielded) {
            // Fail once, then behave as exhausted.
            self.fault_after = None;
            self.entries = Vec::new().into_iter();
            return Some(Err(HostError::cursor("injected cursor fault")));
        }
        let entry = self.entries.next()?;
        self.yielded += 1;
        Some(Ok(entry))
    }

    fn close(&mut self) -> Result<(), HostError> {
        if !self.closed {
            self.closed = true;
            self.open_cursors.fetch_sub(1, Ordering::SeqCst);
        }
        Ok(())
    }
}
