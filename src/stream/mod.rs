//! SSE stream driving
//!
//! Connects a byte source to the line parser: pulls chunks, decodes them as
//! UTF-8 with carry-over, re-assembles lines across chunk boundaries, feeds
//! each complete line to the parser, and dispatches completed events to a
//! [`StreamHandler`].
//!
//! # Module structure
//! - `decoder` - Streaming-safe UTF-8 decoding (Utf8Decoder)

mod decoder;

pub use decoder::Utf8Decoder;

use thiserror::Error;

use crate::callbacks::StreamHandler;
use crate::sse::{SseParseError, SseParser};
use crate::traits::{ByteSource, SourceError};

/// Errors surfaced through [`StreamHandler::on_error`] during a run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SseStreamError {
    /// A line was rejected by the parser; the run continues past it
    #[error("Failed to parse line: {line}")]
    Line {
        /// The offending line, as fed to the parser
        line: String,
        /// Why the parser rejected it
        source: SseParseError,
    },

    /// The byte source failed; the run ends
    #[error("Stream read failed: {0}")]
    Source(#[from] SourceError),

    /// The stream bytes are not valid UTF-8; the run ends
    #[error("Stream is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),
}

impl SseStreamError {
    /// Returns true for failures that end the run. Per-line failures are
    /// skipped over and return false.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, SseStreamError::Line { .. })
    }
}

/// Drives one SSE stream from raw bytes to consumer callbacks.
///
/// Owns all per-stream state: the byte source, the UTF-8 carry, the line
/// carry, and the line parser. A driver serves exactly one stream; nothing
/// is shared between concurrent streams, so separate drivers never interfere.
///
/// # Example
///
/// ```ignore
/// use sse_decode::adapters::StreamByteSource;
/// use sse_decode::callbacks::CollectingHandler;
/// use sse_decode::stream::SseStreamDriver;
///
/// let response = client.get(url).send().await?;
/// let source = StreamByteSource::new(response.bytes_stream());
///
/// let mut handler = CollectingHandler::new();
/// SseStreamDriver::new(source).run(&mut handler).await;
/// ```
#[derive(Debug)]
pub struct SseStreamDriver<S> {
    source: S,
    parser: SseParser,
    decoder: Utf8Decoder,
    /// Decoded text still waiting for its terminating line break
    carry: String,
}

impl<S: ByteSource> SseStreamDriver<S> {
    /// Create a driver that owns `source` for a single run.
    pub fn new(source: S) -> Self {
        Self {
            source,
            parser: SseParser::new(),
            decoder: Utf8Decoder::new(),
            carry: String::new(),
        }
    }

    /// Run the stream to completion.
    ///
    /// Pulls chunks until the source is exhausted, the `[DONE]` sentinel
    /// arrives, or the source or decoder fails. Events and failures are
    /// delivered through `handler` in arrival order, and `on_done` fires
    /// exactly once on every exit path. The only await point is the chunk
    /// pull; all parsing and dispatch happens synchronously in between.
    pub async fn run<H: StreamHandler>(mut self, handler: &mut H) {
        'pull: loop {
            let chunk = match self.source.next_chunk().await {
                Ok(Some(chunk)) => chunk,
                Ok(None) => break 'pull,
                Err(err) => {
                    tracing::warn!(error = %err, "byte source failed");
                    handler.on_error(SseStreamError::Source(err));
                    break 'pull;
                }
            };

            match self.decoder.decode(&chunk) {
                Ok(text) => self.carry.push_str(&text),
                Err(err) => {
                    tracing::warn!(error = %err, "stream is not valid UTF-8");
                    handler.on_error(SseStreamError::Decode(err));
                    break 'pull;
                }
            }

            // Process every line whose terminator has arrived. The remainder
            // stays in the carry until its line break shows up; a chunk that
            // ends mid-line is never split early.
            while let Some(newline) = self.carry.find('\n') {
                let line = self.carry[..newline].trim_end().to_string();
                self.carry.drain(..=newline);

                match self.parser.feed_line(&line) {
                    Ok(Some(event)) => {
                        if event.is_done_sentinel() {
                            tracing::debug!("received done sentinel, ending stream");
                            break 'pull;
                        }
                        if !event.data.is_empty() {
                            handler.on_message(event);
                        }
                    }
                    Ok(None) => {}
                    Err(err) => {
                        // A bad line is skipped; the stream goes on
                        tracing::warn!(line = %line, error = %err, "skipping unparseable line");
                        handler.on_error(SseStreamError::Line { line, source: err });
                    }
                }
            }
        }

        if !self.carry.is_empty() || !self.decoder.pending().is_empty() {
            tracing::debug!(
                text_bytes = self.carry.len(),
                undecoded_bytes = self.decoder.pending().len(),
                "discarding unterminated trailing data"
            );
        }
        handler.on_done();
    }
}
