//! Contract configuration.

use drugtrace_primitives::{DEFAULT_SCAN_END, DEFAULT_SCAN_START};
use serde::Deserialize;

/// Configuration for a `DrugContract`.
///
/// Defaults reproduce the deployed behavior: the `queryAllDrug` window is
/// the lexical interval `["0", "999")`. Keys are compared as strings, so
/// `"1000"` is inside that window and `"9990"` is not.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContractConfig {
    /// Inclusive lower bound of the `queryAllDrug` scan.
    pub scan_start: String,
    /// Exclusive upper bound of the `queryAllDrug` scan.
    pub scan_end: String,
    /// Emit `drug_recorded` / `holder_changed` events.
    pub emit_events: bool,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            scan_start: DEFAULT_SCAN_START.to_string(),
            scan_end: DEFAULT_SCAN_END.to_string(),
            emit_events: true,
        }
    }
}

impl ContractConfig {
    /// Load from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
