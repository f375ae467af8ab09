use crate::level::Level;
use serde::Serialize;

/// Fallback text used when a structured message cannot be serialized.
pub const SERIALIZE_FALLBACK: &str = "Error serializing the logged item";

/// Payload of a log call: either free text or a structured JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum LogMessage {
    Text(String),
    Data(serde_json::Value),
}

impl LogMessage {
    /// Build a structured message from any serializable value.
    ///
    /// If the value cannot be converted to JSON the message degrades to
    /// the fixed fallback text instead of failing; the event is still
    /// buffered, printed and delivered.
    pub fn data<T: Serialize>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(v) => LogMessage::Data(v),
            Err(_) => LogMessage::Text(SERIALIZE_FALLBACK.to_string()),
        }
    }

    /// Text form used for the remote payload and for structured console
    /// output. Text passes through unchanged; structured values are
    /// JSON-serialized, with the fallback text substituted when
    /// serialization fails or yields nothing.
    pub fn wire_text(&self) -> String {
        match self {
            LogMessage::Text(s) => s.clone(),
            LogMessage::Data(v) => match serde_json::to_string(v) {
                Ok(s) if !s.is_empty() => s,
                _ => SERIALIZE_FALLBACK.to_string(),
            },
        }
    }

    /// True for `Text("")`; such messages render without a trailing body.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, LogMessage::Text(s) if s.is_empty())
    }
}

impl From<&str> for LogMessage {
    fn from(s: &str) -> Self {
        LogMessage::Text(s.to_string())
    }
}

impl From<String> for LogMessage {
    fn from(s: String) -> Self {
        LogMessage::Text(s)
    }
}

impl From<serde_json::Value> for LogMessage {
    fn from(v: serde_json::Value) -> Self {
        LogMessage::Data(v)
    }
}

/// One captured log occurrence as retained in the local history buffer.
/// The timestamp is formatted once at call time so the buffered copy and
/// the console line always agree.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub level: Level,
    pub icon: &'static str,
    pub origin: String,
    pub method: String,
    pub message: LogMessage,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteFields {
    pub site: String,
    pub team: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogField {
    pub level: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NameField {
    pub name: String,
}

/// Wire representation sent to the collector endpoint. Built transiently
/// per qualifying log call and never retained.
#[derive(Debug, Clone, Serialize)]
pub struct WireLogItem {
    pub fields: SiteFields,
    pub log: LogField,
    pub user: NameField,
    pub host: NameField,
    pub origin: String,
    pub method: String,
    pub message: String,
    pub timestamp: String,
}
