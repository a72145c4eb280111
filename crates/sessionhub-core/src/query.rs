//! Scoped query construction.
//!
//! [`build_query`] is a pure function turning a scope and client filters into
//! a [`SessionQuery`] predicate the store can evaluate. It never touches the
//! store itself, so the visibility rules are independently testable.
//!
//! Rule precedence:
//! 1. Public scope forces `status = published`; any client-supplied status
//!    filter is actively overridden, never merely defaulted.
//! 2. Owned scope forces `user_id = principal`; a supplied status filter is
//!    additionally applied (absent means "both drafts and published").
//! 3. Keyword (case-insensitive substring over title OR content URL).
//! 4. Date range on `created_at`: start bound at its literal instant, end
//!    bound widened to 23:59:59.999 of its calendar day.
//! 5. Absent filters contribute no predicate term.

use chrono::{DateTime, NaiveDate, Utc};
use sessionhub_commons::{SessionId, SessionRecord, SessionStatus, UserId};

use crate::filters::SessionFilters;

/// Visibility scope for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryScope {
    /// Status-restricted, no ownership check.
    Public,
    /// Ownership-restricted to the given principal, no status restriction by
    /// default.
    Owned(UserId),
}

/// A store-evaluable predicate over session records.
///
/// Every term is conjunctive; `None` terms match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionQuery {
    pub id: Option<SessionId>,
    pub owner_id: Option<UserId>,
    pub status: Option<SessionStatus>,
    /// Lowercased keyword; matched as substring of title or content URL.
    pub keyword: Option<String>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_until: Option<DateTime<Utc>>,
}

impl SessionQuery {
    /// Predicate scoped to a single owner. Used for ownership lookups by the
    /// lifecycle manager.
    pub fn owned(owner_id: UserId) -> Self {
        Self {
            owner_id: Some(owner_id),
            ..Self::default()
        }
    }

    /// Restricts the predicate to a single record id.
    pub fn with_id(mut self, id: SessionId) -> Self {
        self.id = Some(id);
        self
    }

    /// Restricts the predicate to a lifecycle status.
    pub fn with_status(mut self, status: SessionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Evaluates the predicate against a record.
    pub fn matches(&self, record: &SessionRecord) -> bool {
        if let Some(id) = &self.id {
            if &record.id != id {
                return false;
            }
        }
        if let Some(owner_id) = &self.owner_id {
            if &record.user_id != owner_id {
                return false;
            }
        }
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        if let Some(keyword) = &self.keyword {
            let title = record.title.to_lowercase();
            let url = record.content_url.to_lowercase();
            if !title.contains(keyword.as_str()) && !url.contains(keyword.as_str()) {
                return false;
            }
        }
        if let Some(from) = self.created_from {
            if record.created_at < from {
                return false;
            }
        }
        if let Some(until) = self.created_until {
            if record.created_at > until {
                return false;
            }
        }
        true
    }
}

/// Builds the predicate for a listing request.
///
/// See the module docs for rule precedence. An empty keyword string is
/// treated as not supplied.
pub fn build_query(scope: QueryScope, filters: &SessionFilters) -> SessionQuery {
    let (owner_id, status) = match scope {
        // Public scope must never leak drafts: override, don't default.
        QueryScope::Public => (None, Some(SessionStatus::Published)),
        QueryScope::Owned(owner) => (Some(owner), filters.status),
    };

    SessionQuery {
        id: None,
        owner_id,
        status,
        keyword: filters
            .keyword
            .as_deref()
            .filter(|k| !k.is_empty())
            .map(|k| k.to_lowercase()),
        created_from: filters.start_date,
        created_until: filters.end_date.map(end_of_day),
    }
}

/// Widens a calendar day to its inclusive upper bound, 23:59:59.999 UTC.
fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .expect("23:59:59.999 is a valid time")
        .and_utc()
}
