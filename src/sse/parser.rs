//! SSE line parsing logic
//!
//! Contains the stateful SseParser for accumulating lines and emitting events,
//! as well as the line classification function.

use crate::sse::events::{EventData, SseEvent, SseLine, SseParseError};

/// Parse a single SSE line into its component type
///
/// The caller is expected to strip line terminators and trailing whitespace
/// before calling. Exactly one leading space is removed from a field value,
/// so `data:  x` keeps one space. A line without a colon is a field name with
/// an empty value.
pub fn parse_sse_line(line: &str) -> SseLine {
    if line.is_empty() {
        return SseLine::Empty;
    }

    if let Some(stripped) = line.strip_prefix(':') {
        let stripped = stripped.strip_prefix(' ').unwrap_or(stripped);
        return SseLine::Comment(stripped.to_string());
    }

    let (field, value) = match line.find(':') {
        Some(colon) => {
            let value = &line[colon + 1..];
            (&line[..colon], value.strip_prefix(' ').unwrap_or(value))
        }
        None => (line, ""),
    };

    match field {
        "id" => SseLine::Id(value.to_string()),
        "event" => SseLine::Event(value.to_string()),
        "data" => SseLine::Data(value.to_string()),
        _ => SseLine::Ignored(field.to_string()),
    }
}

/// Stateful SSE parser that accumulates lines and emits complete events
///
/// Each stream gets its own parser; nothing is shared between instances.
#[derive(Debug, Default)]
pub struct SseParser {
    /// Numeric value of the most recent `id:` line
    pending_id: Option<f64>,
    /// Value of the most recent `event:` line
    pending_event: Option<String>,
    /// Accumulated data lines (SSE allows multiple data: lines)
    data_buffer: Vec<String>,
}

impl SseParser {
    /// Create a new SSE parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a line to the parser, potentially returning a complete event
    ///
    /// Returns:
    /// - `Ok(Some(event))` - A complete event was parsed
    /// - `Ok(None)` - Line was consumed but event is incomplete
    /// - `Err(error)` - The line was rejected; accumulated state is unchanged
    pub fn feed_line(&mut self, line: &str) -> Result<Option<SseEvent>, SseParseError> {
        match parse_sse_line(line) {
            SseLine::Empty => {
                // Empty line signals end of event - try to emit
                Ok(self.try_emit_event())
            }
            SseLine::Id(value) => {
                let id = value
                    .parse::<f64>()
                    .map_err(|_| SseParseError::InvalidEventId(value))?;
                self.pending_id = Some(id);
                Ok(None)
            }
            SseLine::Event(value) => {
                // A later event: line overwrites an earlier one
                self.pending_event = Some(value);
                Ok(None)
            }
            SseLine::Data(value) => {
                self.data_buffer.push(value);
                Ok(None)
            }
            SseLine::Comment(_) | SseLine::Ignored(_) => {
                // Comments and unrecognized fields leave the state untouched
                Ok(None)
            }
        }
    }

    /// Emit the accumulated event, if any, at a blank-line boundary
    ///
    /// A blank line with no accumulated data emits nothing and keeps any
    /// pending id/event fields, so repeated blank lines are no-ops.
    fn try_emit_event(&mut self) -> Option<SseEvent> {
        if self.data_buffer.is_empty() {
            return None;
        }

        let raw = self.data_buffer.join("\n");
        self.data_buffer.clear();

        // Only payloads that look like JSON get a parse attempt; a failed
        // attempt falls back to the raw string
        let data = if raw.starts_with('{') || raw.starts_with('[') {
            match serde_json::from_str(&raw) {
                Ok(value) => EventData::Json(value),
                Err(_) => EventData::Text(raw),
            }
        } else {
            EventData::Text(raw)
        };

        Some(SseEvent {
            id: self.pending_id.take(),
            event: self.pending_event.take(),
            data,
        })
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.pending_id = None;
        self.pending_event = None;
        self.data_buffer.clear();
    }
}
