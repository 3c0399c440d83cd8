//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided version text is not a `major.minor.patch` triple.
    #[error("invalid version format: {0:?}")]
    InvalidFormat(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
