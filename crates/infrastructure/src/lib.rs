//! vbump Infrastructure - persistence adapters
//!
//! Concrete implementations of the application's ports.

pub mod persistence;

pub use persistence::FileVersionRepository;
