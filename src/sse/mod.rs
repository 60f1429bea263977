//! SSE (Server-Sent Events) wire format
//!
//! Parses the SSE line protocol:
//! - `id: <number>` - event id line
//! - `event: <name>` - event type line
//! - `data: <payload>` - data payload line, repeatable within one event
//! - Empty line - signals end of event
//! - Lines starting with `:` - comments (ignored)
//!
//! # Module structure
//! - `events` - Event type definitions (SseEvent, EventData, SseLine, SseParseError)
//! - `parser` - Parsing logic (SseParser, parse_sse_line)

mod events;
mod parser;

// Re-export public types
pub use events::{EventData, SseEvent, SseLine, SseParseError, DONE_SENTINEL};
pub use parser::{parse_sse_line, SseParser};
