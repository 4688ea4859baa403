//! Host API trait: the state view the contract runs against.
//!
//! The contract never touches the ledger directly. Each invocation gets a
//! `HostApi` implementation exposing point reads, point writes, range
//! scans, event emission, and logging. `LedgerHost` is the standard
//! implementation; tests may substitute their own.

use drugtrace_primitives::{Event, LogLevel};

use crate::error::HostError;
use crate::state_store::ScanGuard;

/// Per-invocation state access capability.
pub trait HostApi {
    // ── State Access ──

    /// Read a value from state.
    ///
    /// Reads see writes made earlier in the same invocation, then fall
    /// through to committed state. Returns `Ok(None)` if the key exists in
    /// neither.
    fn state_get(&self, key: &str) -> Result<Option<Vec<u8>>, HostError>;

    /// Write a key-value pair.
    ///
    /// Fails if the key or value breaks the configured limits or the
    /// substrate rejects the write.
    fn state_put(&mut self, key: &str, value: &[u8]) -> Result<(), HostError>;

    /// Scan all keys in the lexical interval `[start, end)` in ascending
    /// order. The returned guard closes the cursor when dropped.
    fn state_range(&self, start: &str, end: &str) -> Result<ScanGuard<'_>, HostError>;

    // ── Events & Logs ──

    /// Emit an event. Bounded by `max_events`.
    fn emit_event(&mut self, event: Event) -> Result<(), HostError>;

    /// Debug log. Not part of the functional result; callers must not
    /// depend on it being retained.
    fn log(&mut self, level: LogLevel, message: &str);
}
