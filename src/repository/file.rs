//! # JSON File Repository

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use super::{MemoryRepository, RepositoryError, RequestRepository};
use crate::domain::Request;

/// Request store persisted as a JSON array
///
/// The document is read once on open and rewritten after every insert or
/// delete.
pub struct JsonFileRepository {
    path: PathBuf,
    inner: MemoryRepository,
}

impl JsonFileRepository {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref().to_path_buf();
        let requests = read_document(&path)?;
        tracing::debug!("Loaded {} requests from {}", requests.len(), path.display());
        let mut inner = MemoryRepository::new();
        inner.load(requests);
        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let file = File::create(&self.path).map_err(|source| self.io_error(source))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.inner.find_all()).map_err(
            |source| RepositoryError::Json {
                path: self.path.display().to_string(),
                source,
            },
        )
    }

    fn io_error(&self, source: std::io::Error) -> RepositoryError {
        RepositoryError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

fn read_document(path: &Path) -> Result<Vec<Request>, RepositoryError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(RepositoryError::Io {
                path: path.display().to_string(),
                source,
            })
        }
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|source| RepositoryError::Json {
        path: path.display().to_string(),
        source,
    })
}

impl RequestRepository for JsonFileRepository {
    fn insert(&mut self, request: Request) -> Result<Request, RepositoryError> {
        let previous = self.inner.find(&request.id);
        let stored = self.inner.insert(request)?;
        if let Err(e) = self.save() {
            tracing::warn!("Failed to save {}: {}", self.path.display(), e);
            match previous {
                Some(previous) => self.inner.load(vec![previous]),
                None => {
                    self.inner.delete(&stored)?;
                }
            }
            return Err(e);
        }
        Ok(stored)
    }

    fn delete(&mut self, request: &Request) -> Result<Option<Request>, RepositoryError> {
        let removed = self.inner.delete(request)?;
        if let Some(removed) = &removed {
            if let Err(e) = self.save() {
                tracing::warn!("Failed to save {}: {}", self.path.display(), e);
                self.inner.load(vec![removed.clone()]);
                return Err(e);
            }
        }
        Ok(removed)
    }

    fn find(&self, id: &str) -> Option<Request> {
        self.inner.find(id)
    }

    fn find_all(&self) -> Vec<Request> {
        self.inner.find_all()
    }
}
