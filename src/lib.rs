//! Incremental Server-Sent Events decoding for chunked byte streams.
//!
//! Decodes an SSE byte stream into discrete messages without buffering the
//! whole response and without requiring chunks to line up with character,
//! line, or event boundaries. Bytes go in one end; parsed events come out
//! the other through consumer callbacks.
//!
//! Two cooperating pieces do the work:
//! - [`sse::SseParser`] folds complete lines into events at blank-line
//!   boundaries
//! - [`stream::SseStreamDriver`] pulls chunks from a [`traits::ByteSource`],
//!   re-assembles lines across chunk and character splits, and dispatches
//!   events to a [`callbacks::StreamHandler`]
//!
//! # Example
//!
//! ```ignore
//! use sse_decode::{CollectingHandler, SseStreamDriver, StreamByteSource};
//!
//! let response = client.get(url).send().await?;
//! let source = StreamByteSource::new(response.bytes_stream());
//!
//! let mut handler = CollectingHandler::new();
//! SseStreamDriver::new(source).run(&mut handler).await;
//!
//! for event in handler.messages {
//!     println!("{:?}", event.data);
//! }
//! ```

pub mod adapters;
pub mod callbacks;
pub mod sse;
pub mod stream;
pub mod traits;

pub use adapters::{MockByteSource, StreamByteSource};
pub use callbacks::{CollectingHandler, StreamHandler};
pub use sse::{EventData, SseEvent, SseParseError, SseParser};
pub use stream::{SseStreamDriver, SseStreamError};
pub use traits::{ByteSource, SourceError};
