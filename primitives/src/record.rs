//! The drug packet record stored at each ledger key.

use serde::{Deserialize, Serialize};

/// A tracked drug packet.
///
/// All fields are opaque strings. `timestamp` is string-encoded epoch
/// seconds and `location` a string-encoded coordinate pair; neither is
/// parsed. Field declaration order fixes the serialized field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Short manufacturer code, e.g. `"925F"`.
    pub manufacturer: String,
    /// Epoch seconds as a decimal string.
    pub timestamp: String,
    /// `"lat, lon"` pair.
    pub location: String,
    /// Current custodian.
    pub holder: String,
}

impl Record {
    pub fn new(
        manufacturer: impl Into<String>,
        timestamp: impl Into<String>,
        location: impl Into<String>,
        holder: impl Into<String>,
    ) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            timestamp: timestamp.into(),
            location: location.into(),
            holder: holder.into(),
        }
    }

    /// Returns a copy of this record with only the holder replaced.
    pub fn with_holder(&self, holder: impl Into<String>) -> Self {
        Self {
            holder: holder.into(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_holder_keeps_other_fields() {
        let record = Record::new("925F", "1504054225", "67.0006, -70.5476", "KVS");
        let moved = record.with_holder("RightAid");

        assert_eq!(moved.holder, "RightAid");
        assert_eq!(moved.manufacturer, record.manufacturer);
        assert_eq!(moved.timestamp, record.timestamp);
        assert_eq!(moved.location, record.location);
        assert_eq!(record.holder, "KVS");
    }
}
