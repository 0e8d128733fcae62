//! Shared envelope head for all response types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::trace::TraceId;

/// Envelope message: plain text for most responses, a field-name to message
/// map for validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseMessage {
    /// Human-readable text.
    Text(String),
    /// Field-name to message map.
    Fields(HashMap<String, String>),
}

impl From<String> for ResponseMessage {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for ResponseMessage {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<HashMap<String, String>> for ResponseMessage {
    fn from(fields: HashMap<String, String>) -> Self {
        Self::Fields(fields)
    }
}

/// Fields common to every response envelope.
///
/// Construction stamps the current time and the trace id of the active
/// request scope; a fresh id is generated only outside request scopes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseHead {
    /// When the response was built.
    #[serde(with = "timestamp_format")]
    pub timestamp: DateTime<Utc>,
    /// Trace id correlating this response with its log lines.
    #[serde(rename = "traceId")]
    pub trace_id: TraceId,
    /// Response type label (`SUCCESS`, `ERROR: …`).
    #[serde(rename = "type")]
    pub kind: String,
    /// String status code (HTTP or table code).
    pub code: String,
    /// Message shown to the caller.
    pub message: ResponseMessage,
    /// Whether the operation succeeded.
    pub success: bool,
}

impl ResponseHead {
    /// Build a head stamped with the current trace id.
    pub fn new(
        kind: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<ResponseMessage>,
        success: bool,
    ) -> Self {
        Self::with_trace_id(kind, code, message, success, TraceId::current())
    }

    /// Build a head reusing an existing trace id, so a copied envelope stays
    /// correlated with the original request's logs.
    pub fn with_trace_id(
        kind: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<ResponseMessage>,
        success: bool,
        trace_id: TraceId,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            trace_id,
            kind: kind.into(),
            code: code.into(),
            message: message.into(),
            success,
        }
    }
}

/// Serializes envelope timestamps as `dd-MM-yyyy HH:mm:ss`.
mod timestamp_format {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%d-%m-%Y %H:%M:%S";

    pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&timestamp.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let naive = NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(de::Error::custom)?;
        Ok(naive.and_utc())
    }
}
