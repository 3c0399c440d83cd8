//! vbump Domain - Core version types
//!
//! This crate defines the semantic-version model for vbump.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod version;

pub use error::{DomainError, DomainResult};
pub use version::Version;
