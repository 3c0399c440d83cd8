//! Version repository port
//!
//! Defines the interface for per-project version persistence.

use async_trait::async_trait;

/// Errors that can occur inside a version repository.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The project identifier cannot be used as a storage key.
    #[error("invalid project identifier: {0:?}")]
    InvalidProject(String),
}

/// Repository trait for per-project version persistence.
///
/// The repository stores the raw version text; parsing and validation stay
/// in the layers above. Implementations must be safe to call concurrently
/// for different projects; the store serializes calls on the same project.
#[async_trait]
pub trait VersionRepository: Send + Sync {
    /// Loads the stored version text for a project.
    ///
    /// Returns `Ok(None)` if no version has been recorded for `project`.
    ///
    /// # Errors
    /// Returns an error if the record exists but cannot be read.
    async fn load(&self, project: &str) -> Result<Option<String>, RepositoryError>;

    /// Overwrites the stored version text for a project.
    ///
    /// Creates the record if it does not exist. The write must be
    /// all-or-nothing; a concurrent `load` sees either the old text or the
    /// new text, never a partial write.
    ///
    /// # Errors
    /// Returns an error if the record cannot be written.
    async fn store(&self, project: &str, version: &str) -> Result<(), RepositoryError>;
}
