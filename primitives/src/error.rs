//! Codec error type for the drug packet ledger.

/// Failure while encoding or decoding stored record bytes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Stored bytes did not decode into a `Record`.
    #[error("invalid record encoding: {0}")]
    InvalidRecord(String),

    /// A stored value is not valid UTF-8 JSON and cannot be embedded verbatim.
    #[error("stored value at {key} is not valid JSON: {reason}")]
    InvalidJson { key: String, reason: String },

    /// Serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Convenience result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_json_display_names_key() {
        let err = CodecError::InvalidJson {
            key: "7".into(),
            reason: "expected value".into(),
        };
        let s = err.to_string();
        assert!(s.contains("7"));
        assert!(s.contains("expected value"));
    }
}
