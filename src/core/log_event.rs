//! Log event record

use super::error::Result;
use super::severity::Severity;
use serde::{Deserialize, Serialize};

/// One log event as written to every destination
///
/// Serialized as a single JSON line: `{"datetime":…,"severity":…,"content":…}`.
/// JSON encoding escapes line breaks inside the content, so one event is
/// always exactly one line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    #[serde(rename = "datetime")]
    pub timestamp: String,
    pub severity: Severity,
    pub content: serde_json::Value,
}

impl LogEvent {
    pub fn new(timestamp: String, severity: Severity, content: serde_json::Value) -> Self {
        Self {
            timestamp,
            severity,
            content,
        }
    }

    /// Single-line JSON record, without the line terminator
    pub fn to_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a line previously produced by [`Self::to_line`]
    pub fn from_line(line: &str) -> Result<Self> {
        Ok(serde_json::from_str(line)?)
    }
}
