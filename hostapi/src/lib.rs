//! `drugtrace-hostapi` — ledger state access for the drug packet contract.
//!
//! This crate defines the interface between the contract and the ledger
//! substrate. It provides:
//!
//! - `StateStore` trait: committed state, point reads and range scans
//! - `RangeCursor` / `ScanGuard`: closeable range iteration
//! - `MemStore`: in-memory `StateStore` for testing
//! - `HostApi` trait: the per-invocation state view the contract runs on
//! - `LedgerHost`: overlay-backed `HostApi` over any `StateStore`
//! - `ExecutionConfig`: resource limits for one invocation
//! - `HostError`: host-side error type

pub mod error;
pub mod types;
pub mod state_store;
pub mod mem_store;
pub mod traits;
pub mod host;

// Re-export commonly used types at the crate root.
pub use error::HostError;
pub use types::ExecutionConfig;
pub use state_store::{Entry, RangeCursor, ScanGuard, StateStore};
pub use mem_store::MemStore;
pub use traits::HostApi;
pub use host::{HostOutput, LedgerHost};
