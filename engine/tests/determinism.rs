//! Determinism tests: identical invocation and state always give identical
//! results, writes, and write set hashes.
//!
//! The ledger may re-execute an invocation during validation, so nothing in
//! the contract may depend on time, randomness, or process-local counters.

mod common;

use drugtrace_engine::{ContractError, DrugContract, TransactionExecutor, WriteAction};
use drugtrace_hostapi::{ExecutionConfig, HostError, MemStore};
use drugtrace_primitives::{Invocation, ZERO_HASH};

use common::*;

// ── Test: 5-run identical output ──

#[test]
fn test_five_run_identical_output() {
    let store = seeded_store();
    let invocations = [
        ("initLedger", vec![]),
        ("recordDrug", vec!["12", "AB", "1, 2", "3", "Clinic"]),
        ("changeDrugHolder", vec!["3", "Courier"]),
        ("queryAllDrug", vec![]),
        ("queryDrug", vec!["4"]),
        ("queryDrug", vec!["nope"]),
    ];

    for (function, values) in &invocations {
        let first = run(&DrugContract::new(), &store, function, values);
        for i in 1..5 {
            let again = run(&DrugContract::new(), &store, function, values);
            assert_eq!(first, again, "{function} run {i} mismatch");
        }
    }
}

#[test]
fn test_init_ledger_hash_independent_of_prior_state() {
    let empty = run(&DrugContract::new(), &MemStore::new(), "initLedger", &[]);
    let seeded = run(&DrugContract::new(), &seeded_store(), "initLedger", &[]);
    assert_eq!(empty.writes, seeded.writes);
    assert_eq!(empty.write_set_hash, seeded.write_set_hash);
    assert_ne!(empty.write_set_hash, ZERO_HASH);
}

#[test]
fn test_distinct_writes_distinct_hash() {
    let store = MemStore::new();
    let a = run(&DrugContract::new(), &store, "recordDrug", &["1", "M", "L", "T", "A"]);
    let b = run(&DrugContract::new(), &store, "recordDrug", &["1", "M", "L", "T", "B"]);
    assert_ne!(a.write_set_hash, b.write_set_hash);
}

// ── Test: Idempotence ──

#[test]
fn test_record_twice_same_state() {
    let values = ["8", "K1", "10, 10", "1700000000", "Depot"];

    let mut once = MemStore::new();
    run_and_commit(&DrugContract::new(), &mut once, "recordDrug", &values);

    let mut twice = MemStore::new();
    run_and_commit(&DrugContract::new(), &mut twice, "recordDrug", &values);
    run_and_commit(&DrugContract::new(), &mut twice, "recordDrug", &values);

    assert_eq!(once.data(), twice.data());
}

#[test]
fn test_init_ledger_twice_same_state() {
    let mut store = seeded_store();
    let before = store.data().clone();
    run_and_commit(&DrugContract::new(), &mut store, "initLedger", &[]);
    assert_eq!(store.data(), &before);
}

// ── Test: Write Failures ──

#[test]
fn test_write_failure_reports_key_and_reason() {
    init_tracing();
    let store = MemStore::new();
    let config = ExecutionConfig {
        max_value_len: 16,
        ..ExecutionConfig::default()
    };
    let outcome = TransactionExecutor::execute(
        &DrugContract::new(),
        &store,
        &config,
        &Invocation::new("recordDrug", ["k", "M", "L", "T", "H"]),
    );

    match outcome.error() {
        Some(ContractError::WriteFailed { key, action, source }) => {
            assert_eq!(key, "k");
            assert_eq!(*action, WriteAction::RecordDrug);
            assert!(matches!(source, HostError::ValueTooLarge { max: 16, .. }));
        }
        other => panic!("expected write failure, got {other:?}"),
    }
    let message = outcome.response().message;
    assert!(message.starts_with("Failed to record drug packet: k"));
    assert!(message.contains("exceeds limit 16"));
    assert!(outcome.writes.is_empty());
}

#[test]
fn test_change_holder_write_failure() {
    init_tracing();
    let mut store = MemStore::new();
    run_and_commit(&DrugContract::new(), &mut store, "recordDrug", &["1", "M", "L", "T", "H"]);
    let before = store.data().clone();

    // The stored record is 64 bytes; a long holder pushes it past 70.
    let config = ExecutionConfig {
        max_value_len: 70,
        ..ExecutionConfig::default()
    };
    let outcome = TransactionExecutor::execute(
        &DrugContract::new(),
        &store,
        &config,
        &Invocation::new("changeDrugHolder", ["1", "Regional Distribution Centre X"]),
    );

    match outcome.error() {
        Some(ContractError::WriteFailed { key, action, source }) => {
            assert_eq!(key, "1");
            assert_eq!(*action, WriteAction::ChangeHolder);
            assert!(matches!(source, HostError::ValueTooLarge { max: 70, .. }));
        }
        other => panic!("expected write failure, got {other:?}"),
    }
    assert!(outcome
        .response()
        .message
        .starts_with("Failed to change drug holder: 1"));
    assert!(outcome.writes.is_empty());
    assert!(outcome.events.is_empty());
    assert_eq!(outcome.write_set_hash, ZERO_HASH);
    assert_eq!(store.data(), &before);
}

#[test]
fn test_init_ledger_write_failure_is_atomic() {
    let store = MemStore::new();
    let config = ExecutionConfig {
        max_value_len: 105,
        ..ExecutionConfig::default()
    };
    let outcome = TransactionExecutor::execute(
        &DrugContract::new(),
        &store,
        &config,
        &Invocation::new("initLedger", Vec::<String>::new()),
    );

    // Seed "6" is the first record over 105 bytes; "1".."5" were buffered
    // and must be discarded with it.
    match outcome.error() {
        Some(ContractError::WriteFailed { key, action, .. }) => {
            assert_eq!(key, "6");
            assert_eq!(*action, WriteAction::SeedLedger);
        }
        other => panic!("expected write failure, got {other:?}"),
    }
    assert!(outcome.writes.is_empty());
    assert_eq!(outcome.logs.len(), 5);
}
