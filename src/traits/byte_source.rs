//! Byte source trait abstraction.
//!
//! Provides a trait-based abstraction for pull-based chunked byte input,
//! enabling dependency injection and mocking in tests. The decoder only ever
//! asks for "the next chunk of bytes"; it never sees the transport.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Error reported by a byte source.
///
/// Transports carry their own error types; adapters fold them into a message
/// here so the decoder stays transport-agnostic.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct SourceError {
    /// Description from the underlying transport
    pub message: String,
}

impl SourceError {
    /// Create a source error from any displayable cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Trait for pull-based byte input feeding one decoder run.
///
/// Chunks may arrive with any size and any alignment; nothing requires them
/// to end on line or character boundaries. Implementations include the
/// production stream adapter and a scripted mock for testing.
///
/// # Example
///
/// ```ignore
/// use sse_decode::traits::{ByteSource, SourceError};
///
/// async fn drain<S: ByteSource>(source: &mut S) -> Result<usize, SourceError> {
///     let mut total = 0;
///     while let Some(chunk) = source.next_chunk().await? {
///         total += chunk.len();
///     }
///     Ok(total)
/// }
/// ```
#[async_trait]
pub trait ByteSource: Send {
    /// Pull the next chunk of bytes.
    ///
    /// # Returns
    /// - `Ok(Some(bytes))` - the next chunk
    /// - `Ok(None)` - the source is exhausted; no more data will arrive
    /// - `Err(error)` - the source failed and cannot continue
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_display() {
        let err = SourceError::new("connection reset by peer");
        assert_eq!(err.to_string(), "connection reset by peer");
    }

    #[test]
    fn test_source_error_clone() {
        let err = SourceError::new("timeout");
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
