//! Trait abstractions for dependency injection and testability.
//!
//! This module provides trait-based abstractions for core functionality,
//! enabling dependency injection, mocking, and better testability.
//!
//! # Traits
//!
//! - [`ByteSource`] - pull-based chunked byte input

pub mod byte_source;

pub use byte_source::{ByteSource, SourceError};
