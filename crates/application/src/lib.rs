//! vbump Application - version store engine
//!
//! Defines the persistence port and the [`VersionStore`] that applies
//! bump/set transitions to per-project version records.

pub mod error;
pub mod ports;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{VersionStore, bump_transient_minor, bump_transient_patch};
