//! # Request Statuses
//!
//! Every tracked request moves through the same small vocabulary of phases,
//! whether it is a singular read or a bulk delete:
//!
//! ```text
//! NULL ──attempt──▶ PENDING ──succeed──▶ SUCCEEDED
//!                      │   └────fail────▶ FAILED
//!                      └──────abort─────▶ ABORTED
//! any ──reset──▶ NULL
//! ```
//!
//! `ABORTED` is kept distinct from `NULL` so that callers can tell a cancelled
//! request apart from one that was never started.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Lifecycle phase of one CRUD request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    /// Rest state: never attempted, or explicitly reset.
    #[default]
    Null,
    Pending,
    Succeeded,
    Failed,
    /// The caller cancelled the request while it was in flight.
    Aborted,
}

impl RequestStatus {
    /// Wire representation, as stored inside metadata objects.
    pub const fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Null => "NULL",
            RequestStatus::Pending => "PENDING",
            RequestStatus::Succeeded => "SUCCEEDED",
            RequestStatus::Failed => "FAILED",
            RequestStatus::Aborted => "ABORTED",
        }
    }

    /// Parses a wire string. Unknown strings yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "NULL" => Some(RequestStatus::Null),
            "PENDING" => Some(RequestStatus::Pending),
            "SUCCEEDED" => Some(RequestStatus::Succeeded),
            "FAILED" => Some(RequestStatus::Failed),
            "ABORTED" => Some(RequestStatus::Aborted),
            _ => None,
        }
    }

    /// Reads a status out of an arbitrary JSON value.
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_str().and_then(Self::parse)
    }

    pub fn is_pending(self) -> bool {
        self == RequestStatus::Pending
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RequestStatus> for Value {
    fn from(status: RequestStatus) -> Self {
        Value::String(status.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings_parse_back() {
        for status in [
            RequestStatus::Null,
            RequestStatus::Pending,
            RequestStatus::Succeeded,
            RequestStatus::Failed,
            RequestStatus::Aborted,
        ] {
            assert_eq!(RequestStatus::parse(status.as_str()), Some(status));
            assert_eq!(RequestStatus::from_value(&Value::from(status)), Some(status));
        }
        assert_eq!(RequestStatus::parse("sandwiches"), None);
    }

    #[test]
    fn serde_uses_screaming_names() {
        let json = serde_json::to_string(&RequestStatus::Succeeded).unwrap();
        assert_eq!(json, "\"SUCCEEDED\"");
        let parsed: RequestStatus = serde_json::from_str("\"ABORTED\"").unwrap();
        assert_eq!(parsed, RequestStatus::Aborted);
    }
}
