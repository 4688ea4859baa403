//! Shared test helpers for integration tests.
//!
//! Provides store factories, invoke-and-commit helpers, and record lookup
//! used across all integration test files.

#![allow(dead_code)]

use std::sync::Once;

use drugtrace_engine::{DrugContract, ExecutionOutcome, HolderPolicy, TransactionExecutor};
use drugtrace_hostapi::{ExecutionConfig, MemStore};
use drugtrace_primitives::{codec::decode_record, Invocation, Record};

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once. Honors `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

// ── Execution ──

/// Execute against `store` without committing.
pub fn run<P: HolderPolicy>(
    contract: &DrugContract<P>,
    store: &MemStore,
    function: &str,
    values: &[&str],
) -> ExecutionOutcome {
    init_tracing();
    TransactionExecutor::execute(
        contract,
        store,
        &ExecutionConfig::default(),
        &Invocation::new(function, values.iter().copied()),
    )
}

/// Execute and, on success, apply the write set to `store`.
pub fn run_and_commit<P: HolderPolicy>(
    contract: &DrugContract<P>,
    store: &mut MemStore,
    function: &str,
    values: &[&str],
) -> ExecutionOutcome {
    let outcome = run(contract, store, function, values);
    if outcome.is_ok() {
        store.commit(outcome.writes.clone());
    }
    outcome
}

/// Store holding the ten seed records.
pub fn seeded_store() -> MemStore {
    let mut store = MemStore::new();
    let outcome = run_and_commit(&DrugContract::new(), &mut store, "initLedger", &[]);
    assert!(outcome.is_ok(), "initLedger failed: {:?}", outcome.error());
    store
}

/// Decode the committed record at `key`.
pub fn record_at(store: &MemStore, key: &str) -> Record {
    let bytes = store
        .data()
        .get(key)
        .unwrap_or_else(|| panic!("no value at {key}"));
    decode_record(bytes).unwrap()
}

/// Parse a `queryAllDrug` payload into `(key, record)` pairs.
pub fn parse_listing(payload: &[u8]) -> Vec<(String, Record)> {
    let items: Vec<serde_json::Value> = serde_json::from_slice(payload).unwrap();
    items
        .into_iter()
        .map(|item| {
            let key = item["Key"].as_str().unwrap().to_string();
            let record: Record = serde_json::from_value(item["Record"].clone()).unwrap();
            (key, record)
        })
        .collect()
}
