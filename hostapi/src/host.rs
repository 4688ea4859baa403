//! Overlay-backed host for a single contract invocation.
//!
//! `LedgerHost` combines a committed `StateStore` with a `StateOverlay`
//! write buffer, enforces the `ExecutionConfig` limits, and collects
//! events and log lines. It is created fresh for each invocation and
//! consumed with [`LedgerHost::finish`] once the contract returns.

use std::cmp::Ordering;
use std::iter::Peekable;

use drugtrace_primitives::{Event, LogLevel, LogLine, StateOverlay};
use tracing::{debug, error, info, trace, warn};

use crate::error::HostError;
use crate::state_store::{Entry, RangeCursor, ScanGuard, StateStore};
use crate::traits::HostApi;
use crate::types::ExecutionConfig;

/// Everything an invocation produced, handed back by [`LedgerHost::finish`].
#[derive(Debug)]
pub struct HostOutput {
    /// Buffered writes, not yet committed.
    pub overlay: StateOverlay,
    pub events: Vec<Event>,
    pub logs: Vec<LogLine>,
}

/// Per-invocation host over committed state.
pub struct LedgerHost<'s> {
    store: &'s dyn StateStore,
    overlay: StateOverlay,
    config: ExecutionConfig,
    events: Vec<Event>,
    logs: Vec<LogLine>,
}

impl<'s> LedgerHost<'s> {
    pub fn new(store: &'s dyn StateStore, config: ExecutionConfig) -> Self {
        Self {
            store,
            overlay: StateOverlay::new(),
            config,
            events: Vec::new(),
            logs: Vec::new(),
        }
    }

    /// Writes buffered so far.
    pub fn overlay(&self) -> &StateOverlay {
        &self.overlay
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn logs(&self) -> &[LogLine] {
        &self.logs
    }

    /// Consume the host and return its buffered output.
    pub fn finish(self) -> HostOutput {
        HostOutput {
            overlay: self.overlay,
            events: self.events,
            logs: self.logs,
        }
    }

    fn check_key(&self, key: &str) -> Result<(), HostError> {
        if key.is_empty() {
            return Err(HostError::EmptyKey);
        }
        if key.len() > self.config.max_key_len {
            return Err(HostError::KeyTooLarge {
                len: key.len(),
                max: self.config.max_key_len,
            });
        }
        Ok(())
    }
}

impl HostApi for LedgerHost<'_> {
    fn state_get(&self, key: &str) -> Result<Option<Vec<u8>>, HostError> {
        match self.overlay.get(key) {
            Some(value) => Ok(Some(value.to_vec())),
            None => self.store.get(key),
        }
    }

    fn state_put(&mut self, key: &str, value: &[u8]) -> Result<(), HostError> {
        self.check_key(key)?;
        if value.len() > self.config.max_value_len {
            return Err(HostError::ValueTooLarge {
                len: value.len(),
                max: self.config.max_value_len,
            });
        }
        if self.overlay.projected_write_bytes(key, value) > self.config.max_write_bytes {
            return Err(HostError::WriteLimit {
                max: self.config.max_write_bytes,
            });
        }
        self.overlay.set(key.to_string(), value.to_vec());
        Ok(())
    }

    fn state_range(&self, start: &str, end: &str) -> Result<ScanGuard<'_>, HostError> {
        let committed = self.store.range(start, end)?;
        let pending = self.overlay.range(start, end);
        if pending.is_empty() {
            return Ok(ScanGuard::new(committed));
        }
        Ok(ScanGuard::new(Box::new(MergedCursor {
            committed,
            committed_head: None,
            committed_done: false,
            pending: pending.into_iter().peekable(),
        })))
    }

    fn emit_event(&mut self, event: Event) -> Result<(), HostError> {
        if self.events.len() >= self.config.max_events as usize {
            return Err(HostError::EventLimit {
                max: self.config.max_events,
            });
        }
        self.events.push(event);
        Ok(())
    }

    fn log(&mut self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Trace => trace!(target: "drugtrace::contract", "{message}"),
            LogLevel::Debug => debug!(target: "drugtrace::contract", "{message}"),
            LogLevel::Info => info!(target: "drugtrace::contract", "{message}"),
            LogLevel::Warn => warn!(target: "drugtrace::contract", "{message}"),
            LogLevel::Error => error!(target: "drugtrace::contract", "{message}"),
        }
        if self.logs.len() >= self.config.max_log_lines as usize {
            return;
        }
        self.logs.push(LogLine {
            level,
            message: truncate_utf8(message, self.config.max_log_line_len).to_string(),
        });
    }
}

/// Merges buffered writes into a committed range scan. Buffered values win
/// on equal keys.
struct MergedCursor<'a> {
    committed: Box<dyn RangeCursor + 'a>,
    committed_head: Option<Entry>,
    committed_done: bool,
    pending: Peekable<std::vec::IntoIter<Entry>>,
}

impl RangeCursor for MergedCursor<'_> {
    fn next_entry(&mut self) -> Option<Result<Entry, HostError>> {
        if self.committed_head.is_none() && !self.committed_done {
            match self.committed.next_entry() {
                Some(Ok(entry)) => self.committed_head = Some(entry),
                Some(Err(err)) => {
                    self.committed_done = true;
                    return Some(Err(err));
                }
                None => self.committed_done = true,
            }
        }

        let order = match (&self.committed_head, self.pending.peek()) {
            (None, None) => return None,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some((committed_key, _)), Some((pending_key, _))) => committed_key.cmp(pending_key),
        };
        match order {
            Ordering::Less => self.committed_head.take().map(Ok),
            Ordering::Equal => {
                self.committed_head = None;
                self.pending.next().map(Ok)
            }
            Ordering::Greater => self.pending.next().map(Ok),
        }
    }

    fn close(&mut self) -> Result<(), HostError> {
        self.committed.close()
    }
}

/// Longest prefix of `s` no longer than `max` bytes, on a char boundary.
fn truncate_utf8(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
