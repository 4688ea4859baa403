//! Transaction executor: the contract's state transition function.
//!
//! `TransactionExecutor::execute` maps `(invocation, committed state)` to
//! `(write set, result)`:
//!
//! 1. Open a `LedgerHost` over the committed store
//! 2. Resolve the operation, validate arguments, run the handler
//! 3. On success, drain the overlay into an ordered write set and digest it
//! 4. On failure, discard writes and events; keep logs
//!
//! **Atomicity:** a failed invocation produces no writes, so it can never
//! partially commit. Applying the write set is left to the caller (the
//! ledger substrate, or `MemStore::commit` in tests).

use std::collections::BTreeMap;

use drugtrace_hostapi::{ExecutionConfig, LedgerHost, StateStore};
use drugtrace_primitives::{
    types::hash_to_hex, write_set_digest, Event, Hash, Invocation, LogLine, Response, ZERO_HASH,
};
use tracing::{debug, warn};

use crate::contract::DrugContract;
use crate::error::ContractError;
use crate::policy::HolderPolicy;

/// Everything one invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// Payload on success, contract error on failure.
    pub result: Result<Vec<u8>, ContractError>,
    /// Ordered write set. Empty on failure.
    pub writes: BTreeMap<String, Vec<u8>>,
    /// Events emitted. Empty on failure.
    pub events: Vec<Event>,
    /// Log lines, kept on failure too.
    pub logs: Vec<LogLine>,
    /// BLAKE3 commitment over `writes`; `ZERO_HASH` when empty.
    pub write_set_hash: Hash,
}

impl ExecutionOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn payload(&self) -> Option<&[u8]> {
        self.result.as_deref().ok()
    }

    pub fn error(&self) -> Option<&ContractError> {
        self.result.as_ref().err()
    }

    /// Render the boundary response returned to the ledger.
    pub fn response(&self) -> Response {
        match &self.result {
            Ok(payload) => Response::success(payload.clone()),
            Err(err) => Response::error(err.to_string()),
        }
    }
}

/// Stateless executor. All state comes from the `StateStore` passed in.
pub struct TransactionExecutor;

impl TransactionExecutor {
    /// Execute one invocation against committed state.
    pub fn execute<P: HolderPolicy>(
        contract: &DrugContract<P>,
        store: &dyn StateStore,
        config: &ExecutionConfig,
        invocation: &Invocation,
    ) -> ExecutionOutcome {
        let mut host = LedgerHost::new(store, config.clone());
        let result = contract.invoke(&mut host, &invocation.function, &invocation.args);
        let output = host.finish();

        match result {
            Ok(payload) => {
                let writes = output.overlay.drain();
                let write_set_hash = write_set_digest(&writes);
                debug!(
                    function = %invocation.function,
                    writes = writes.len(),
                    events = output.events.len(),
                    write_set = %hash_to_hex(&write_set_hash),
                    "invocation succeeded"
                );
                ExecutionOutcome {
                    result: Ok(payload),
                    writes,
                    events: output.events,
                    logs: output.logs,
                    write_set_hash,
                }
            }
            Err(err) => {
                warn!(
                    function = %invocation.function,
                    kind = err.kind(),
                    error = %err,
                    "invocation failed"
                );
                ExecutionOutcome {
                    result: Err(err),
                    writes: BTreeMap::new(),
                    events: Vec::new(),
                    logs: output.logs,
                    write_set_hash: ZERO_HASH,
                }
            }
        }
    }
}
