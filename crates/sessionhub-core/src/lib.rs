//! # sessionhub-core
//!
//! Domain core of SessionHub: the scoped query builder and the session
//! lifecycle manager.
//!
//! The query builder is a pure function from (scope, filters) to a
//! store-evaluable predicate; it enforces the visibility rules (public scope
//! never observes drafts, owned scope never crosses owners). The lifecycle
//! manager owns the draft→published state machine and performs every
//! ownership lookup through a scoped query, so "does not exist", "not owned",
//! and "wrong state" are indistinguishable from outside.

pub mod error;
pub mod filters;
pub mod query;
pub mod session_repo;
pub mod sessions;

pub use error::{CoreError, CoreResult};
pub use filters::SessionFilters;
pub use query::{build_query, QueryScope, SessionQuery};
pub use session_repo::{SessionRepository, StoreSessionRepository};
pub use sessions::{DraftInput, SavedDraft, SessionService};
