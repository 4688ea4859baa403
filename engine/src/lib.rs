//! `drugtrace-engine` — deterministic drug packet record contract.
//!
//! This crate implements the contract's state transition function:
//! `f(invocation, committed_state) → (write_set, result)`
//!
//! The contract keeps no state of its own. Every read and write goes
//! through an injected `HostApi`, so the same invocation against the same
//! snapshot always yields the same writes.
//!
//! ## Architecture
//!
//! - [`operation::Operation`]: closed set of operations, parsed from wire names
//! - [`validation`]: argument count checks before any handler runs
//! - [`contract::DrugContract`]: the five handlers
//! - [`policy::HolderPolicy`]: pluggable authorization for holder transfers
//! - [`executor::TransactionExecutor`]: one invocation in, write set and result out

pub mod config;
pub mod contract;
pub mod error;
pub mod executor;
pub mod fixtures;
pub mod operation;
pub mod policy;
pub mod validation;

// Re-export key types for convenience
pub use config::ContractConfig;
pub use contract::{DrugContract, EVENT_DRUG_RECORDED, EVENT_HOLDER_CHANGED};
pub use error::{ContractError, ContractResult, WriteAction};
pub use executor::{ExecutionOutcome, TransactionExecutor};
pub use operation::Operation;
pub use policy::{AllowAll, FnPolicy, HolderPolicy, KnownHolders};
