//! The closed set of contract operations.
//!
//! Invocations arrive with a function name; it is resolved once into an
//! `Operation` and every later branch is an exhaustive `match`.

use std::fmt;
use std::str::FromStr;

use crate::error::ContractError;

/// A contract operation, keyed by its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `queryDrug(key)`: return the stored record bytes.
    QueryDrug,
    /// `initLedger()`: write the ten seed records at keys `"1"`..`"10"`.
    InitLedger,
    /// `recordDrug(key, manufacturer, location, timestamp, holder)`: upsert.
    RecordDrug,
    /// `queryAllDrug()`: JSON array of every record in the scan window.
    QueryAllDrug,
    /// `changeDrugHolder(key, holder)`: replace the holder field.
    ChangeDrugHolder,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::QueryDrug,
        Operation::InitLedger,
        Operation::RecordDrug,
        Operation::QueryAllDrug,
        Operation::ChangeDrugHolder,
    ];

    /// Wire name used by the ledger to address this operation.
    pub fn name(self) -> &'static str {
        match self {
            Self::QueryDrug => "queryDrug",
            Self::InitLedger => "initLedger",
            Self::RecordDrug => "recordDrug",
            Self::QueryAllDrug => "queryAllDrug",
            Self::ChangeDrugHolder => "changeDrugHolder",
        }
    }

    /// Exact number of arguments the operation takes.
    pub fn arity(self) -> usize {
        match self {
            Self::QueryDrug => 1,
            Self::InitLedger => 0,
            Self::RecordDrug => 5,
            Self::QueryAllDrug => 0,
            Self::ChangeDrugHolder => 2,
        }
    }
}

impl FromStr for Operation {
    type Err = ContractError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| ContractError::UnknownOperation(name.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_names() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "querydrug".parse::<Operation>().unwrap_err();
        assert_eq!(err, ContractError::UnknownOperation("querydrug".into()));
        assert!("".parse::<Operation>().is_err());
    }

    #[test]
    fn test_arity() {
        assert_eq!(Operation::QueryDrug.arity(), 1);
        assert_eq!(Operation::InitLedger.arity(), 0);
        assert_eq!(Operation::RecordDrug.arity(), 5);
        assert_eq!(Operation::QueryAllDrug.arity(), 0);
        assert_eq!(Operation::ChangeDrugHolder.arity(), 2);
    }
}
