//! Mock byte source for testing.
//!
//! Replays a scripted sequence of chunks and failures, allowing decoder
//! behavior to be tested without a transport. Chunks are delivered exactly
//! as scripted, so tests control chunk boundaries down to the byte.

use std::collections::VecDeque;

use async_trait::async_trait;
use bytes::Bytes;

use crate::traits::{ByteSource, SourceError};

/// One scripted step.
#[derive(Debug, Clone)]
enum MockStep {
    Chunk(Bytes),
    Error(SourceError),
}

/// Mock byte source that replays a scripted sequence.
///
/// # Example
///
/// ```ignore
/// use sse_decode::adapters::MockByteSource;
///
/// let mut source = MockByteSource::new();
/// source.push_chunk("data: hel");
/// source.push_chunk("lo\n\n");
/// source.push_error("connection reset");
/// ```
#[derive(Debug, Default)]
pub struct MockByteSource {
    steps: VecDeque<MockStep>,
}

impl MockByteSource {
    /// Create a source with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a source from a list of chunks, delivered in order.
    pub fn from_chunks<I, B>(chunks: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Bytes>,
    {
        let mut source = Self::new();
        for chunk in chunks {
            source.push_chunk(chunk);
        }
        source
    }

    /// Append a chunk to the script.
    pub fn push_chunk(&mut self, chunk: impl Into<Bytes>) {
        self.steps.push_back(MockStep::Chunk(chunk.into()));
    }

    /// Append a failure to the script.
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.steps.push_back(MockStep::Error(SourceError::new(message)));
    }

    /// Number of scripted steps not yet consumed.
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

#[async_trait]
impl ByteSource for MockByteSource {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, SourceError> {
        match self.steps.pop_front() {
            Some(MockStep::Chunk(chunk)) => Ok(Some(chunk)),
            Some(MockStep::Error(err)) => Err(err),
            None => Ok(None),
        }
    }
}
