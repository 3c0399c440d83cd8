//! Persistence adapters.

mod file_repository;

pub use file_repository::FileVersionRepository;
