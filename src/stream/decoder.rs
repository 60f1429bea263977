//! Streaming-safe UTF-8 decoding
//!
//! Chunk boundaries can fall anywhere, including in the middle of a
//! multi-byte character. The decoder holds the incomplete trailing sequence
//! between calls so every character decodes exactly once.

use std::str::Utf8Error;

/// Incremental UTF-8 decoder with carry-over for split sequences.
///
/// A UTF-8 sequence is at most four bytes, so the carry never holds more
/// than three bytes between chunks.
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    /// Incomplete trailing sequence from the previous chunk
    pending: Vec<u8>,
}

impl Utf8Decoder {
    /// Create a decoder with no pending bytes
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the next chunk, returning all complete characters.
    ///
    /// An incomplete sequence at the end of the chunk is held back for the
    /// next call. Bytes that can never start or continue a valid sequence
    /// are an error; the reported offset refers to the carried-plus-chunk
    /// byte buffer.
    pub fn decode(&mut self, chunk: &[u8]) -> Result<String, Utf8Error> {
        let mut bytes = std::mem::take(&mut self.pending);
        bytes.extend_from_slice(chunk);

        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(err) => {
                let utf8_err = err.utf8_error();
                if utf8_err.error_len().is_some() {
                    // Invalid sequence, not a chunk-boundary artifact
                    return Err(utf8_err);
                }
                // Incomplete trailing sequence: carry it and return the
                // complete prefix
                let mut bytes = err.into_bytes();
                self.pending = bytes.split_off(utf8_err.valid_up_to());
                String::from_utf8(bytes).map_err(|e| e.utf8_error())
            }
        }
    }

    /// Bytes currently carried as an incomplete trailing sequence
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Take and clear the carried bytes
    pub fn take_pending(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.pending)
    }
}
