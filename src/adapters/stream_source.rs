//! Byte source adapter for `futures` streams.
//!
//! Bridges any stream of byte chunks, such as a reqwest `bytes_stream()`,
//! into the [`ByteSource`] capability the driver consumes. Transport errors
//! are stringified so the decoder never depends on a transport error type.

use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use futures_util::StreamExt;

use crate::traits::{ByteSource, SourceError};

/// Adapter exposing a chunked byte stream as a [`ByteSource`].
///
/// # Example
///
/// ```ignore
/// use sse_decode::adapters::StreamByteSource;
///
/// let response = client.get(url).send().await?;
/// let source = StreamByteSource::new(response.bytes_stream());
/// ```
#[derive(Debug)]
pub struct StreamByteSource<S> {
    inner: S,
}

impl<S> StreamByteSource<S> {
    /// Wrap a stream of byte chunks.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S, E> ByteSource for StreamByteSource<S>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin + Send,
    E: fmt::Display + Send,
{
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, SourceError> {
        match self.inner.next().await {
            Some(Ok(chunk)) => Ok(Some(chunk)),
            Some(Err(err)) => Err(SourceError::new(err.to_string())),
            None => Ok(None),
        }
    }
}
