//! Application error types

use thiserror::Error;
use vbump_domain::DomainError;

use crate::ports::RepositoryError;

/// Errors returned by version store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Caller-supplied version text does not parse.
    #[error(transparent)]
    InvalidFormat(#[from] DomainError),

    /// No version has been recorded for the project.
    #[error("no version recorded for project {0:?}")]
    NotFound(String),

    /// The persisted text for a project does not parse. This is a storage
    /// integrity problem, not a caller error, and is never auto-repaired.
    #[error("corrupt stored version {stored:?} for project {project:?}")]
    CorruptState {
        /// The project whose record is corrupt.
        project: String,
        /// The unparsable stored text.
        stored: String,
    },

    /// The persistence collaborator failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
