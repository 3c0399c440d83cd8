//! Port definitions (interfaces)
//!
//! Ports define the boundary between the application core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer.

mod version_repository;

pub use version_repository::{RepositoryError, VersionRepository};
