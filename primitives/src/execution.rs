//! Invocation boundary types: invocation, response, events, and log lines.
//!
//! The ledger substrate calls the contract once per transaction with an
//! operation name and ordered string arguments, and receives back either a
//! success payload or an error message.

/// A single contract invocation as submitted by the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Operation name, e.g. `"recordDrug"`.
    pub function: String,
    /// Ordered string arguments.
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Outcome status at the invocation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    Error,
}

impl Status {
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Result returned to the ledger for one invocation.
///
/// On success `payload` carries the raw result bytes (possibly empty) and
/// `message` is empty. On error `payload` is empty and `message` is a
/// human-readable description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    pub payload: Vec<u8>,
    pub message: String,
}

impl Response {
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: Status::Ok,
            payload,
            message: String::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            payload: Vec::new(),
            message: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}

/// Event emitted by a successful invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Event type identifier, e.g. `"holder_changed"`.
    pub event_type: String,
    pub attributes: Vec<EventAttribute>,
}

impl Event {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute (builder style).
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(EventAttribute {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Look up the first attribute with the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }
}

/// A single key-value attribute within an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventAttribute {
    pub key: String,
    pub value: String,
}

/// Log level for contract log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Log line emitted by the contract.
///
/// Logs are not part of the functional result. The contract never branches
/// on log success and the host may drop lines past its limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: LogLevel,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_new_collects_args() {
        let inv = Invocation::new("changeDrugHolder", ["3", "RightAid"]);
        assert_eq!(inv.args.len(), 2);
        assert_eq!(inv.args[1], "RightAid");

        let none = Invocation::new("initLedger", Vec::<String>::new());
        assert!(none.args.is_empty());
    }

    #[test]
    fn test_response_constructors() {
        let ok = Response::success(b"data".to_vec());
        assert!(ok.is_ok());
        assert_eq!(ok.payload, b"data".to_vec());
        assert!(ok.message.is_empty());

        let err = Response::error("Could not locate drug");
        assert!(!err.is_ok());
        assert!(err.payload.is_empty());
        assert_eq!(err.status.to_string(), "ERROR");
    }

    #[test]
    fn test_event_attributes() {
        let event = Event::new("holder_changed")
            .attr("key", "3")
            .attr("to", "RightAid");
        assert_eq!(event.get("key"), Some("3"));
        assert_eq!(event.get("to"), Some("RightAid"));
        assert_eq!(event.get("from"), None);
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Error > LogLevel::Info);
        assert!(LogLevel::Trace < LogLevel::Debug);
    }
}
