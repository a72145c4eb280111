//! Authentication error types.

use thiserror::Error;

/// Result type for authentication operations.
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Errors raised by the credential service and access gate.
///
/// Variants carry enough detail for logging; the API layer collapses them to
/// generic client-visible messages so that "unknown email" and "wrong
/// password" are indistinguishable from outside.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Email already registered (case-insensitive match).
    #[error("Email is already registered")]
    EmailTaken,

    /// Unknown email or failed password comparison.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Structurally invalid email supplied at registration.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Password fails the strength policy.
    #[error("Weak password: {0}")]
    WeakPassword(String),

    /// No Authorization header on a request that requires one.
    #[error("Authorization header is required. Use 'Authorization: Bearer <token>'")]
    MissingAuthorization,

    /// Authorization header present but unusable.
    #[error("Malformed authorization header: {0}")]
    MalformedAuthorization(String),

    /// Token signature valid but `exp` has passed.
    #[error("Token expired")]
    TokenExpired,

    /// Token signature invalid or payload malformed.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Bcrypt or JWT signing failure.
    #[error("Hashing error: {0}")]
    Hashing(String),

    /// Underlying store failure.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<sessionhub_store::StorageError> for AuthError {
    fn from(err: sessionhub_store::StorageError) -> Self {
        AuthError::Storage(err.to_string())
    }
}
