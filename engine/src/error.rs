//! Contract error types.
//!
//! Every error is terminal for its invocation: the executor discards the
//! buffered writes and returns the `Display` text to the ledger.

use std::fmt;

use drugtrace_hostapi::HostError;
use drugtrace_primitives::CodecError;

use crate::operation::Operation;

/// Which write a `WriteFailed` error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    SeedLedger,
    RecordDrug,
    ChangeHolder,
}

impl fmt::Display for WriteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeedLedger => write!(f, "seed drug packet"),
            Self::RecordDrug => write!(f, "record drug packet"),
            Self::ChangeHolder => write!(f, "change drug holder"),
        }
    }
}

/// Contract-level error returned by `DrugContract::invoke`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    /// Wrong number of arguments for the operation.
    #[error("Incorrect number of arguments. Expecting {expected}")]
    ArgumentCount {
        operation: Operation,
        expected: usize,
        got: usize,
    },

    /// No record stored at the key.
    #[error("Could not locate drug: {key}")]
    NotFound { key: String },

    /// The ledger rejected a write.
    #[error("Failed to {action}: {key} ({source})")]
    WriteFailed {
        key: String,
        action: WriteAction,
        source: HostError,
    },

    /// Function name not recognized.
    #[error("Invalid Smart Contract function name: {0}")]
    UnknownOperation(String),

    /// The configured holder policy refused a transfer.
    #[error("Holder change for {key} to {holder} rejected: {reason}")]
    Unauthorized {
        key: String,
        holder: String,
        reason: String,
    },

    /// A stored value could not be decoded as a record.
    #[error("Stored drug packet {key} is unreadable: {source}")]
    CorruptRecord { key: String, source: CodecError },

    /// Record encoding failed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// A state read or scan failed.
    #[error("ledger error: {0}")]
    Host(#[from] HostError),
}

impl ContractError {
    /// Short kind label, stable across message wording.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ArgumentCount { .. } => "argument_count",
            Self::NotFound { .. } => "not_found",
            Self::WriteFailed { .. } => "write_failed",
            Self::UnknownOperation(_) => "unknown_operation",
            Self::Unauthorized { .. } => "unauthorized",
            Self::CorruptRecord { .. } => "corrupt_record",
            Self::Codec(_) => "codec",
            Self::Host(_) => "host",
        }
    }
}

/// Convenience result type for contract handlers.
pub type ContractResult<T> = Result<T, ContractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_count_message() {
        let err = ContractError::ArgumentCount {
            operation: Operation::RecordDrug,
            expected: 5,
            got: 3,
        };
        assert_eq!(err.to_string(), "Incorrect number of arguments. Expecting 5");
        assert_eq!(err.kind(), "argument_count");
    }

    #[test]
    fn test_write_failed_includes_reason() {
        let err = ContractError::WriteFailed {
            key: "7".into(),
            action: WriteAction::ChangeHolder,
            source: HostError::rejected("disk full"),
        };
        let s = err.to_string();
        assert!(s.starts_with("Failed to change drug holder: 7"));
        assert!(s.contains("disk full"));
    }

    #[test]
    fn test_unknown_operation_message() {
        let err = ContractError::UnknownOperation("burnDrug".into());
        assert!(err.to_string().starts_with("Invalid Smart Contract function name"));
        assert!(err.to_string().contains("burnDrug"));
    }

    #[test]
    fn test_from_host_error() {
        let err: ContractError = HostError::cursor("gone").into();
        assert_eq!(err.kind(), "host");
    }
}
