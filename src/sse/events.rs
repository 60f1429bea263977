//! SSE event types and definitions
//!
//! Contains the event record emitted at each blank-line boundary, the
//! payload union for its data field, and the classification of raw lines
//! used by the parser.

use serde::Serialize;

/// Data payload some producers send as a final event to mark the intentional
/// end of a stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// Payload of a completed SSE event.
///
/// Joined `data:` lines are parsed as JSON only when the payload looks like
/// JSON (first character `{` or `[`). Anything else, including JSON-looking
/// text that fails to parse, stays a raw string. Serializes to the wire-level
/// value: the JSON document, the raw string, or `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventData {
    /// Structured payload parsed from the joined data lines
    Json(serde_json::Value),
    /// Raw joined data lines
    Text(String),
    /// No `data:` line contributed to the event
    Empty,
}

impl EventData {
    /// Returns true when no `data:` line contributed to the event.
    pub fn is_empty(&self) -> bool {
        matches!(self, EventData::Empty)
    }

    /// Returns the raw string payload, if this is a text payload.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            EventData::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the parsed JSON payload, if this is a structured payload.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            EventData::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// A complete event assembled from the lines between two blank-line
/// boundaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SseEvent {
    /// Numeric value of the last `id:` line seen before the boundary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<f64>,
    /// Value of the last `event:` line seen before the boundary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// Joined `data:` payload
    pub data: EventData,
}

impl SseEvent {
    /// Returns true when the data payload is the literal end-of-stream
    /// sentinel.
    pub fn is_done_sentinel(&self) -> bool {
        matches!(&self.data, EventData::Text(text) if text == DONE_SENTINEL)
    }
}

/// Represents a parsed SSE line
#[derive(Debug, Clone, PartialEq)]
pub enum SseLine {
    /// Event id declaration (e.g., "id: 42")
    Id(String),
    /// Event type declaration (e.g., "event: content")
    Event(String),
    /// Data payload (e.g., "data: {\"text\": \"hello\"}")
    Data(String),
    /// Empty line - signals end of event
    Empty,
    /// Comment line (starts with ':')
    Comment(String),
    /// Field this decoder does not recognize; carried for diagnostics
    Ignored(String),
}

/// Errors that can occur during SSE parsing
#[derive(Debug, Clone, PartialEq)]
pub enum SseParseError {
    /// The value of an `id:` line was not a number
    InvalidEventId(String),
}

impl std::fmt::Display for SseParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SseParseError::InvalidEventId(value) => {
                write!(f, "Invalid event id: {}", value)
            }
        }
    }
}

impl std::error::Error for SseParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_done_sentinel_detection() {
        let event = SseEvent {
            id: None,
            event: None,
            data: EventData::Text("[DONE]".to_string()),
        };
        assert!(event.is_done_sentinel());

        let event = SseEvent {
            id: None,
            event: None,
            data: EventData::Text("[DONE] ".to_string()),
        };
        assert!(!event.is_done_sentinel());

        let event = SseEvent {
            id: None,
            event: None,
            data: EventData::Json(json!("[DONE]")),
        };
        assert!(!event.is_done_sentinel());
    }

    #[test]
    fn test_event_data_accessors() {
        let data = EventData::Json(json!({"text": "hi"}));
        assert!(!data.is_empty());
        assert_eq!(data.as_json(), Some(&json!({"text": "hi"})));
        assert_eq!(data.as_text(), None);

        let data = EventData::Text("plain".to_string());
        assert!(!data.is_empty());
        assert_eq!(data.as_text(), Some("plain"));
        assert_eq!(data.as_json(), None);

        let data = EventData::Empty;
        assert!(data.is_empty());
        assert_eq!(data.as_text(), None);
        assert_eq!(data.as_json(), None);
    }

    #[test]
    fn test_event_serializes_to_wire_shape() {
        let event = SseEvent {
            id: Some(7.0),
            event: Some("message".to_string()),
            data: EventData::Json(json!({"text": "hi"})),
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"id": 7.0, "event": "message", "data": {"text": "hi"}})
        );

        let event = SseEvent {
            id: None,
            event: None,
            data: EventData::Text("raw".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"data": "raw"})
        );
    }

    #[test]
    fn test_sse_parse_error_display() {
        let err = SseParseError::InvalidEventId("abc".to_string());
        assert_eq!(format!("{}", err), "Invalid event id: abc");
    }
}
