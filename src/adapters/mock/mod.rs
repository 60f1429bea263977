//! Mock implementations for testing.
//!
//! This module provides test doubles for the crate's trait abstractions,
//! enabling unit testing without network dependencies.
//!
//! # Available Mocks
//!
//! - [`MockByteSource`] - byte source with scripted chunks and failures

pub mod byte_source;

pub use byte_source::MockByteSource;
