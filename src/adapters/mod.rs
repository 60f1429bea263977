//! Concrete implementations of trait abstractions.
//!
//! This module provides production-ready adapters that implement the traits
//! defined in `crate::traits`, plus test doubles under [`mock`].
//!
//! # Adapters
//!
//! - [`StreamByteSource`] - byte source over any `futures` stream of chunks
//!
//! # Mock Implementations
//!
//! - [`mock::MockByteSource`] - scripted chunks and failures for tests

pub mod mock;
pub mod stream_source;

pub use mock::MockByteSource;
pub use stream_source::StreamByteSource;
