//! File-backed version repository.
//!
//! Each project's version lives in its own plain-text file named after the
//! project inside the data directory:
//!
//! ```text
//! datadir/
//!   billing-service      ("1.4.2")
//!   web-frontend         ("0.9.0")
//! ```

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use vbump_application::ports::{RepositoryError, VersionRepository};

/// Version repository storing one file per project under a data directory.
#[derive(Debug, Clone)]
pub struct FileVersionRepository {
    data_dir: PathBuf,
}

impl FileVersionRepository {
    /// Creates a repository rooted at `data_dir`. The directory is created
    /// on the first write if it does not exist.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the record file path for a project, rejecting identifiers
    /// that would escape the data directory or collide with temp files.
    fn record_path(&self, project: &str) -> Result<PathBuf, RepositoryError> {
        let escapes = project.is_empty()
            || project.starts_with('.')
            || project.contains(['/', '\\', '\0']);
        if escapes {
            return Err(RepositoryError::InvalidProject(project.to_string()));
        }
        Ok(self.data_dir.join(project))
    }

    /// Temp file used to stage a write before the atomic rename. Hidden
    /// names are rejected as project identifiers, so this cannot collide
    /// with another project's record.
    fn staging_path(&self, project: &str) -> PathBuf {
        self.data_dir.join(format!(".{project}.tmp"))
    }
}

#[async_trait]
impl VersionRepository for FileVersionRepository {
    async fn load(&self, project: &str) -> Result<Option<String>, RepositoryError> {
        let path = self.record_path(project)?;
        match fs::read_to_string(&path).await {
            // A hand-edited record may carry a trailing newline.
            Ok(text) => Ok(Some(text.trim_end().to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RepositoryError::Io(e)),
        }
    }

    async fn store(&self, project: &str, version: &str) -> Result<(), RepositoryError> {
        let path = self.record_path(project)?;
        fs::create_dir_all(&self.data_dir).await?;

        // Stage and rename so a reader never observes a partial write.
        let staging = self.staging_path(project);
        fs::write(&staging, version.as_bytes()).await?;
        fs::rename(&staging, &path).await?;
        Ok(())
    }
}
