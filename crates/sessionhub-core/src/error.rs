//! Domain error types for the session core.

use thiserror::Error;

/// Result type for core session operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors raised by the session lifecycle manager.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Record absent, not owned by the caller, or in the wrong state for the
    /// requested transition. Deliberately conflated to prevent existence and
    /// ownership probing.
    #[error("Session not found or not owned by user")]
    NotFound,

    /// One or more fields failed validation. Carries every violation so the
    /// caller sees all problems at once.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Underlying store failure. Not retried by this crate.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<sessionhub_store::StorageError> for CoreError {
    fn from(err: sessionhub_store::StorageError) -> Self {
        CoreError::Storage(err.to_string())
    }
}
