//! Host-side error types for the ledger state interface.
//!
//! `HostError` is returned by `StateStore`, `RangeCursor`, and `HostApi`
//! methods. Its `Display` text is what the contract embeds into
//! "write failed" messages, so variants describe the rejection plainly.

/// Error raised by the ledger substrate or the per-invocation host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// Keys must be non-empty.
    #[error("key must not be empty")]
    EmptyKey,

    #[error("key length {len} exceeds limit {max}")]
    KeyTooLarge { len: usize, max: usize },

    #[error("value length {len} exceeds limit {max}")]
    ValueTooLarge { len: usize, max: usize },

    /// The invocation's total write budget would be exceeded.
    #[error("write budget of {max} bytes exceeded")]
    WriteLimit { max: u64 },

    /// The event budget is exhausted.
    #[error("event limit of {max} reached")]
    EventLimit { max: u32 },

    /// A range cursor failed while iterating.
    #[error("range cursor error: {0}")]
    Cursor(String),

    /// The substrate refused the write.
    #[error("write rejected: {0}")]
    Rejected(String),
}

impl HostError {
    /// Create a rejected-write error.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    /// Create a cursor error.
    pub fn cursor(reason: impl Into<String>) -> Self {
        Self::Cursor(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = HostError::KeyTooLarge { len: 300, max: 256 };
        let s = err.to_string();
        assert!(s.contains("300"));
        assert!(s.contains("256"));

        let err = HostError::rejected("disk full");
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(HostError::cursor("gone"), HostError::Cursor("gone".into()));
        assert_eq!(HostError::rejected("full"), HostError::Rejected("full".into()));
    }
}
