//! Session lifecycle manager.
//!
//! Owns the draft/published state machine: `Draft` is initial, `Published`
//! is terminal, and the only exposed transition is draft→published. Every
//! fetch that precedes a mutation is scoped to `(id, owner)` — and for
//! publish additionally `status = draft` — so a missing record, a record
//! owned by someone else, and a record in the wrong state all fail with the
//! same `NotFound`.

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};
use sessionhub_commons::{validation, SessionId, SessionRecord, SessionStatus, UserId};

use crate::error::{CoreError, CoreResult};
use crate::filters::SessionFilters;
use crate::query::{build_query, QueryScope, SessionQuery};
use crate::session_repo::SessionRepository;

/// Fields accepted by the save-draft operation.
///
/// All fields are optional; on update, a `None` or empty value leaves the
/// prior value untouched (idempotent partial patch).
#[derive(Debug, Clone, Default)]
pub struct DraftInput {
    /// Existing record to patch; `None` creates a new draft.
    pub id: Option<SessionId>,
    pub title: Option<String>,
    pub tags: Option<Vec<String>>,
    pub content_url: Option<String>,
}

/// Result of a save-draft call.
#[derive(Debug, Clone)]
pub struct SavedDraft {
    pub record: SessionRecord,
    /// True when a new record was created rather than patched.
    pub created: bool,
}

/// Drives the session state machine over an injected repository handle.
pub struct SessionService {
    repo: Arc<dyn SessionRepository>,
}

impl SessionService {
    pub fn new(repo: Arc<dyn SessionRepository>) -> Self {
        Self { repo }
    }

    /// Creates a new draft or patches an existing one.
    ///
    /// On create, `title` and `content_url` are required. On update, the
    /// record's status is unconditionally reset to `Draft` — editing a
    /// published record silently demotes it back to draft.
    ///
    /// # Errors
    /// * `CoreError::Validation` - missing/malformed required fields (all
    ///   violations listed)
    /// * `CoreError::NotFound` - `id` given but no record matches
    ///   `(id, owner)`
    pub async fn save_draft(&self, owner_id: &UserId, input: DraftInput) -> CoreResult<SavedDraft> {
        match input.id.clone() {
            Some(id) => self.update_draft(owner_id, &id, input).await,
            None => self.create_draft(owner_id, input).await,
        }
    }

    async fn create_draft(&self, owner_id: &UserId, input: DraftInput) -> CoreResult<SavedDraft> {
        let mut violations = Vec::new();

        let title = input.title.as_deref().unwrap_or("").trim().to_string();
        if let Err(v) = validation::validate_title(&title) {
            violations.push(v);
        }
        let content_url = input.content_url.as_deref().unwrap_or("").trim().to_string();
        if let Err(v) = validation::validate_content_url(&content_url) {
            violations.push(v);
        }
        if !violations.is_empty() {
            return Err(CoreError::Validation(violations));
        }

        let now = Utc::now();
        let record = SessionRecord {
            id: SessionId::generate(),
            user_id: owner_id.clone(),
            title,
            tags: input.tags.unwrap_or_default(),
            content_url,
            status: SessionStatus::Draft,
            created_at: now,
            updated_at: now,
        };
        self.repo.put(&record).await?;

        info!("Created draft session {} for user {}", record.id, owner_id);
        Ok(SavedDraft {
            record,
            created: true,
        })
    }

    async fn update_draft(
        &self,
        owner_id: &UserId,
        id: &SessionId,
        input: DraftInput,
    ) -> CoreResult<SavedDraft> {
        let mut record = self
            .fetch_one(SessionQuery::owned(owner_id.clone()).with_id(id.clone()))
            .await?
            .ok_or(CoreError::NotFound)?;

        let mut violations = Vec::new();

        if let Some(title) = non_empty(input.title.as_deref()) {
            record.title = title.to_string();
        }
        if let Some(tags) = input.tags.filter(|tags| !tags.is_empty()) {
            record.tags = tags;
        }
        if let Some(url) = non_empty(input.content_url.as_deref()) {
            match validation::validate_content_url(url) {
                Ok(()) => record.content_url = url.to_string(),
                Err(v) => violations.push(v),
            }
        }
        if !violations.is_empty() {
            return Err(CoreError::Validation(violations));
        }

        // Always back to draft, even when the record was published.
        record.status = SessionStatus::Draft;
        record.updated_at = Utc::now();
        self.repo.put(&record).await?;

        debug!("Patched draft session {} for user {}", record.id, owner_id);
        Ok(SavedDraft {
            record,
            created: false,
        })
    }

    /// Transitions a draft to published.
    ///
    /// The fetch is scoped to `(id, owner, status = draft)`, so a record that
    /// is absent, not owned, or already published fails identically.
    ///
    /// # Errors
    /// `CoreError::NotFound` - no matching draft.
    pub async fn publish(&self, owner_id: &UserId, id: &SessionId) -> CoreResult<SessionRecord> {
        let mut record = self
            .fetch_one(
                SessionQuery::owned(owner_id.clone())
                    .with_id(id.clone())
                    .with_status(SessionStatus::Draft),
            )
            .await?
            .ok_or(CoreError::NotFound)?;

        record.status = SessionStatus::Published;
        record.updated_at = Utc::now();
        self.repo.put(&record).await?;

        info!("Published session {} for user {}", record.id, owner_id);
        Ok(record)
    }

    /// Lists published records visible to everyone.
    pub async fn list_public(&self, filters: &SessionFilters) -> CoreResult<Vec<SessionRecord>> {
        let query = build_query(QueryScope::Public, filters);
        self.repo.find(&query).await
    }

    /// Lists the caller's own records, drafts included unless filtered.
    pub async fn list_owned(
        &self,
        owner_id: &UserId,
        filters: &SessionFilters,
    ) -> CoreResult<Vec<SessionRecord>> {
        let query = build_query(QueryScope::Owned(owner_id.clone()), filters);
        self.repo.find(&query).await
    }

    /// Fetches a single record scoped to `(id, owner)`.
    ///
    /// # Errors
    /// `CoreError::NotFound` - absent or not owned (indistinguishable).
    pub async fn get_owned(
        &self,
        owner_id: &UserId,
        id: &SessionId,
    ) -> CoreResult<SessionRecord> {
        self.fetch_one(SessionQuery::owned(owner_id.clone()).with_id(id.clone()))
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn fetch_one(&self, query: SessionQuery) -> CoreResult<Option<SessionRecord>> {
        Ok(self.repo.find(&query).await?.into_iter().next())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
