//! # Request Repository
//!
//! Storage of request descriptions so they can be listed and replayed.
//! [`MemoryRepository`] keeps them in process; [`JsonFileRepository`]
//! mirrors every change to a JSON document on disk.

mod file;
mod memory;

pub use file::JsonFileRepository;
pub use memory::MemoryRepository;

use thiserror::Error;

use crate::domain::Request;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Cannot access repository file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid repository document '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Insert/delete commands plus lookups over stored requests
pub trait RequestRepository {
    /// Store `request`, assigning an id if it has none, and return the
    /// stored copy
    fn insert(&mut self, request: Request) -> Result<Request, RepositoryError>;

    /// Remove the stored request with the same id
    fn delete(&mut self, request: &Request) -> Result<Option<Request>, RepositoryError>;

    fn find(&self, id: &str) -> Option<Request>;

    /// Every stored request, oldest first
    fn find_all(&self) -> Vec<Request>;
}
