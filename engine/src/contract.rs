//! The drug packet record contract.
//!
//! `DrugContract` is stateless between invocations: every operation reads
//! and writes through the `HostApi` it is handed, and uses no clock,
//! randomness, or process-local counters. Re-running an invocation against
//! the same state snapshot gives the same result and the same writes.
//!
//! Operations (see [`Operation`]):
//!
//! | name | args | effect |
//! |------|------|--------|
//! | `queryDrug` | key | stored bytes, unchanged |
//! | `initLedger` | none | ten seed records at `"1"`..`"10"` |
//! | `recordDrug` | key, manufacturer, location, timestamp, holder | upsert |
//! | `queryAllDrug` | none | `[{"Key":..,"Record":..}]` over the scan window |
//! | `changeDrugHolder` | key, holder | replace `holder` only |

use drugtrace_hostapi::HostApi;
use drugtrace_primitives::{
    codec::{decode_record, encode_query_results, encode_record},
    CodecError, Event, LogLevel, Record, Response,
};

use crate::config::ContractConfig;
use crate::error::{ContractError, ContractResult, WriteAction};
use crate::fixtures::{seed_key, seed_records};
use crate::operation::Operation;
use crate::policy::{AllowAll, HolderPolicy};
use crate::validation::validate_arguments;

/// Event type emitted by a successful `recordDrug`.
pub const EVENT_DRUG_RECORDED: &str = "drug_recorded";
/// Event type emitted by a successful `changeDrugHolder`.
pub const EVENT_HOLDER_CHANGED: &str = "holder_changed";

/// The record contract, parameterized by its holder transfer policy.
#[derive(Debug, Clone)]
pub struct DrugContract<P = AllowAll> {
    config: ContractConfig,
    policy: P,
}

impl DrugContract<AllowAll> {
    /// Contract with default configuration and no holder check.
    pub fn new() -> Self {
        Self::with_policy(ContractConfig::default(), AllowAll)
    }

    pub fn with_config(config: ContractConfig) -> Self {
        Self::with_policy(config, AllowAll)
    }
}

impl Default for DrugContract<AllowAll> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: HolderPolicy> DrugContract<P> {
    pub fn with_policy(config: ContractConfig, policy: P) -> Self {
        Self { config, policy }
    }

    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Lifecycle hook called once at instantiation. Touches no state;
    /// seeding is the separate `initLedger` operation.
    pub fn init(&self) -> Response {
        Response::success(Vec::new())
    }

    /// Resolve `function` and run it with `args`.
    pub fn invoke(
        &self,
        host: &mut dyn HostApi,
        function: &str,
        args: &[String],
    ) -> ContractResult<Vec<u8>> {
        let operation: Operation = function.parse()?;
        self.execute(host, operation, args)
    }

    /// Run an already-resolved operation.
    pub fn execute(
        &self,
        host: &mut dyn HostApi,
        operation: Operation,
        args: &[String],
    ) -> ContractResult<Vec<u8>> {
        validate_arguments(operation, args)?;
        match operation {
            Operation::QueryDrug => self.query_drug(host, &args[0]),
            Operation::InitLedger => {
                self.init_ledger(host)?;
                Ok(Vec::new())
            }
            Operation::RecordDrug => {
                let record = Record::new(&args[1], &args[3], &args[2], &args[4]);
                self.record_drug(host, &args[0], &record)?;
                Ok(Vec::new())
            }
            Operation::QueryAllDrug => self.query_all_drug(host),
            Operation::ChangeDrugHolder => {
                self.change_drug_holder(host, &args[0], &args[1])?;
                Ok(Vec::new())
            }
        }
    }

    /// Return the bytes stored at `key` without decoding them.
    fn query_drug(&self, host: &mut dyn HostApi, key: &str) -> ContractResult<Vec<u8>> {
        host.state_get(key)?.ok_or_else(|| ContractError::NotFound {
            key: key.to_string(),
        })
    }

    fn init_ledger(&self, host: &mut dyn HostApi) -> ContractResult<()> {
        for (index, record) in seed_records().iter().enumerate() {
            let key = seed_key(index);
            let bytes = encode_record(record)?;
            host.state_put(&key, &bytes)
                .map_err(|source| ContractError::WriteFailed {
                    key: key.clone(),
                    action: WriteAction::SeedLedger,
                    source,
                })?;
            host.log(
                LogLevel::Info,
                &format!("Added {key}: {} held by {}", record.manufacturer, record.holder),
            );
        }
        Ok(())
    }

    /// Upsert: any prior value at `key` is replaced.
    fn record_drug(&self, host: &mut dyn HostApi, key: &str, record: &Record) -> ContractResult<()> {
        let bytes = encode_record(record)?;
        host.state_put(key, &bytes)
            .map_err(|source| ContractError::WriteFailed {
                key: key.to_string(),
                action: WriteAction::RecordDrug,
                source,
            })?;
        self.emit(
            host,
            Event::new(EVENT_DRUG_RECORDED)
                .attr("key", key)
                .attr("holder", record.holder.as_str()),
        );
        Ok(())
    }

    fn query_all_drug(&self, host: &mut dyn HostApi) -> ContractResult<Vec<u8>> {
        let mut entries = Vec::new();
        {
            let mut scan = host.state_range(&self.config.scan_start, &self.config.scan_end)?;
            for entry in &mut scan {
                entries.push(entry?);
            }
            scan.close()?;
        }

        let payload = encode_query_results(&entries).map_err(|err| {
            let key = match &err {
                CodecError::InvalidJson { key, .. } => Some(key.clone()),
                _ => None,
            };
            match key {
                Some(key) => ContractError::CorruptRecord { key, source: err },
                None => ContractError::Codec(err),
            }
        })?;

        host.log(
            LogLevel::Debug,
            &format!("- queryAllDrug:\n{}", String::from_utf8_lossy(&payload)),
        );
        Ok(payload)
    }

    fn change_drug_holder(
        &self,
        host: &mut dyn HostApi,
        key: &str,
        new_holder: &str,
    ) -> ContractResult<()> {
        let bytes = host.state_get(key)?.ok_or_else(|| ContractError::NotFound {
            key: key.to_string(),
        })?;
        let record = decode_record(&bytes).map_err(|source| ContractError::CorruptRecord {
            key: key.to_string(),
            source,
        })?;

        self.policy
            .authorize(key, &record, new_holder)
            .map_err(|reason| ContractError::Unauthorized {
                key: key.to_string(),
                holder: new_holder.to_string(),
                reason,
            })?;

        let updated = record.with_holder(new_holder);
        let bytes = encode_record(&updated)?;
        host.state_put(key, &bytes)
            .map_err(|source| ContractError::WriteFailed {
                key: key.to_string(),
                action: WriteAction::ChangeHolder,
                source,
            })?;
        self.emit(
            host,
            Event::new(EVENT_HOLDER_CHANGED)
                .attr("key", key)
                .attr("from", record.holder.as_str())
                .attr("to", new_holder),
        );
        Ok(())
    }

    /// Emit an event if enabled. A full event budget does not fail the
    /// invocation.
    fn emit(&self, host: &mut dyn HostApi, event: Event) {
        if !self.config.emit_events {
            return;
        }
        let event_type = event.event_type.clone();
        if let Err(err) = host.emit_event(event) {
            host.log(LogLevel::Warn, &format!("dropped {event_type} event: {err}"));
        }
    }
}
