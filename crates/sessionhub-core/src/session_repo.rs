//! Session record persistence.
//!
//! The repository executes [`SessionQuery`] predicates against the document
//! store. The store-backed implementation keeps one partition:
//!
//! - `sessions` — session id → [`SessionRecord`] document
//!
//! `find` scans the partition and applies the predicate in-process, returning
//! matches newest-first. Listing order is otherwise unspecified by the
//! external contract.

use std::sync::Arc;

use async_trait::async_trait;
use sessionhub_commons::{SessionId, SessionRecord};
use sessionhub_store::{EntityStore, Partition, StorageBackend};

use crate::error::CoreResult;
use crate::query::SessionQuery;

/// Abstraction over session record persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Fetches a record by id, unscoped. Callers needing ownership checks go
    /// through `find` with a scoped query instead.
    async fn get(&self, id: &SessionId) -> CoreResult<Option<SessionRecord>>;

    /// Writes a record, overwriting any previous version whole-document.
    async fn put(&self, record: &SessionRecord) -> CoreResult<()>;

    /// Returns all records matching the predicate, newest-first.
    async fn find(&self, query: &SessionQuery) -> CoreResult<Vec<SessionRecord>>;
}

struct SessionEntityStore {
    backend: Arc<dyn StorageBackend>,
}

impl EntityStore<SessionId, SessionRecord> for SessionEntityStore {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> Partition {
        Partition::new("sessions")
    }
}

/// Store-backed [`SessionRepository`].
pub struct StoreSessionRepository {
    sessions: SessionEntityStore,
}

impl StoreSessionRepository {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            sessions: SessionEntityStore { backend },
        }
    }
}

#[async_trait]
impl SessionRepository for StoreSessionRepository {
    async fn get(&self, id: &SessionId) -> CoreResult<Option<SessionRecord>> {
        Ok(self.sessions.get(id)?)
    }

    async fn put(&self, record: &SessionRecord) -> CoreResult<()> {
        Ok(self.sessions.put(&record.id, record)?)
    }

    async fn find(&self, query: &SessionQuery) -> CoreResult<Vec<SessionRecord>> {
        let mut matches: Vec<SessionRecord> = self
            .sessions
            .scan_all()?
            .into_iter()
            .filter(|record| query.matches(record))
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matches)
    }
}
