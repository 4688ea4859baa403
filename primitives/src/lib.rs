//! `drugtrace-primitives` — foundational types for the drug packet ledger contract.
//!
//! This crate provides the record type and its JSON codec, the per-invocation
//! write overlay, the invocation boundary types, and the write-set digest
//! shared by the host API and the contract engine.

pub mod types;
pub mod error;
pub mod record;
pub mod codec;
pub mod state;
pub mod execution;
pub mod digest;

// Re-export commonly used types at the crate root for convenience.
pub use types::{Hash, ZERO_HASH, MAX_KEY_LEN, MAX_VALUE_LEN, DEFAULT_SCAN_START, DEFAULT_SCAN_END};
pub use error::{CodecError, CodecResult};
pub use record::Record;
pub use state::StateOverlay;
pub use execution::{Invocation, Response, Status, Event, EventAttribute, LogLevel, LogLine};
pub use digest::write_set_digest;
