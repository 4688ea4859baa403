//! Host-side configuration types.
//!
//! `ExecutionConfig` bundles resource limits for a single contract
//! invocation. They are enforced by `LedgerHost`; the contract cannot
//! exceed them.

use drugtrace_primitives::{MAX_KEY_LEN, MAX_VALUE_LEN};

/// Resource limits for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Maximum length of a state key in bytes.
    pub max_key_len: usize,
    /// Maximum length of a state value in bytes.
    pub max_value_len: usize,
    /// Maximum total bytes (keys + values) written per invocation.
    pub max_write_bytes: u64,
    /// Maximum number of events per invocation.
    pub max_events: u32,
    /// Maximum number of log lines kept per invocation.
    pub max_log_lines: u32,
    /// Maximum length of a single log line in bytes; longer lines are truncated.
    pub max_log_line_len: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            max_key_len: MAX_KEY_LEN,
            max_value_len: MAX_VALUE_LEN,
            max_write_bytes: 4 * 1024 * 1024, // 4 MiB
            max_events: 1024,
            max_log_lines: 256,
            max_log_line_len: 1024,
        }
    }
}
