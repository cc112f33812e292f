//! # Memory Repository

use std::sync::Arc;

use super::{RepositoryError, RequestRepository};
use crate::client::{Clock, SystemClock};
use crate::collection::CollectionMap;
use crate::domain::Request;

/// In-process request store
pub struct MemoryRepository {
    items: CollectionMap<String, Request>,
    clock: Arc<dyn Clock>,
    sequence: u64,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            items: CollectionMap::new(),
            clock,
            sequence: 0,
        }
    }

    /// Seed the store with already persisted requests
    pub(crate) fn load(&mut self, requests: Vec<Request>) {
        let loaded = CollectionMap::from_values(requests, |request| request.id.clone());
        self.items.merge(loaded);
    }

    pub fn len(&self) -> usize {
        self.items.size()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn next_id(&mut self, now: i64) -> String {
        loop {
            self.sequence += 1;
            let id = format!("req-{now}-{}", self.sequence);
            if !self.items.exists(&id) {
                return id;
            }
        }
    }
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestRepository for MemoryRepository {
    fn insert(&mut self, mut request: Request) -> Result<Request, RepositoryError> {
        let now = self.clock.now_millis();
        if request.id.is_empty() {
            request.id = self.next_id(now);
        }

        request.timestamp = match self.items.find(&request.id) {
            Some(stored) => stored.timestamp,
            None if request.timestamp == 0 => now,
            None => request.timestamp,
        };
        request.modified = now;

        tracing::debug!("Storing request '{}'", request.id);
        self.items.put(request.id.clone(), request.clone());
        Ok(request)
    }

    fn delete(&mut self, request: &Request) -> Result<Option<Request>, RepositoryError> {
        tracing::debug!("Deleting request '{}'", request.id);
        Ok(self.items.remove(&request.id))
    }

    fn find(&self, id: &str) -> Option<Request> {
        self.items.find(&id.to_string()).cloned()
    }

    fn find_all(&self) -> Vec<Request> {
        let mut requests: Vec<Request> = self.items.values().into_iter().cloned().collect();
        requests.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.id.cmp(&b.id)));
        requests
    }
}
