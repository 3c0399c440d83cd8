//! Per-project version store.
//!
//! Mediates between the HTTP surface and the persistence port: every
//! mutating operation is an atomic load-transition-store on one project's
//! record, serialized against other mutations of the same project.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use vbump_domain::Version;

use crate::error::{StoreError, StoreResult};
use crate::ports::VersionRepository;

/// Tracks one semantic version per named project.
///
/// Writes to the same project are mutually exclusive; writes to distinct
/// projects proceed independently. The repository is the source of truth:
/// every mutation re-reads the stored record before applying its
/// transition.
pub struct VersionStore<R> {
    repository: R,
    /// Per-project write locks, created on first use.
    locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl<R: VersionRepository> VersionStore<R> {
    /// Creates a store backed by the given repository.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the lock guarding mutations of `project`, creating it on
    /// first access. The map guard is held only for the lookup, never
    /// across I/O.
    fn project_lock(&self, project: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self
            .locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            locks
                .entry(project.to_string())
                .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(()))),
        )
    }

    /// Reads the current version of a project.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no version has been recorded.
    pub async fn get_version(&self, project: &str) -> StoreResult<Version> {
        match self.repository.load(project).await? {
            Some(stored) => parse_stored(project, &stored),
            None => Err(StoreError::NotFound(project.to_string())),
        }
    }

    /// Sets a project's version to explicitly supplied text.
    ///
    /// This is a force-set: the new version is written unconditionally and
    /// may move backwards relative to the previous record.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidFormat`] if `text` is not a
    /// `major.minor.patch` triple.
    pub async fn set_version(&self, project: &str, text: &str) -> StoreResult<Version> {
        let version: Version = text.parse()?;
        let lock = self.project_lock(project);
        let _guard = lock.lock().await;
        self.repository
            .store(project, &version.to_string())
            .await?;
        Ok(version)
    }

    /// Advances a project's major version, resetting minor and patch.
    ///
    /// # Errors
    /// Returns [`StoreError::CorruptState`] if the stored record does not
    /// parse, or a repository error if persistence fails.
    pub async fn bump_major(&self, project: &str) -> StoreResult<Version> {
        self.bump(project, Version::bump_major).await
    }

    /// Advances a project's minor version, resetting patch.
    ///
    /// # Errors
    /// See [`VersionStore::bump_major`].
    pub async fn bump_minor(&self, project: &str) -> StoreResult<Version> {
        self.bump(project, Version::bump_minor).await
    }

    /// Advances a project's patch version.
    ///
    /// # Errors
    /// See [`VersionStore::bump_major`].
    pub async fn bump_patch(&self, project: &str) -> StoreResult<Version> {
        self.bump(project, Version::bump_patch).await
    }

    /// Atomic load-transition-store. A project with no record starts from
    /// `0.0.0`, so the first patch bump of a new project yields `0.0.1`.
    async fn bump(
        &self,
        project: &str,
        transition: fn(Version) -> Version,
    ) -> StoreResult<Version> {
        let lock = self.project_lock(project);
        let _guard = lock.lock().await;

        let current = match self.repository.load(project).await? {
            Some(stored) => parse_stored(project, &stored)?,
            None => Version::ZERO,
        };
        let next = transition(current);
        self.repository.store(project, &next.to_string()).await?;
        Ok(next)
    }
}

/// Parses a repository record, mapping failures to [`StoreError::CorruptState`]
/// so they stay distinct from bad caller input.
fn parse_stored(project: &str, stored: &str) -> StoreResult<Version> {
    stored.parse().map_err(|_| StoreError::CorruptState {
        project: project.to_string(),
        stored: stored.to_string(),
    })
}

/// Bumps the minor component of caller-supplied version text without
/// touching any stored record.
///
/// # Errors
/// Returns [`StoreError::InvalidFormat`] if `text` does not parse.
pub fn bump_transient_minor(text: &str) -> StoreResult<Version> {
    Ok(text.parse::<Version>()?.bump_minor())
}

/// Bumps the patch component of caller-supplied version text without
/// touching any stored record.
///
/// # Errors
/// Returns [`StoreError::InvalidFormat`] if `text` does not parse.
pub fn bump_transient_patch(text: &str) -> StoreResult<Version> {
    Ok(text.parse::<Version>()?.bump_patch())
}
