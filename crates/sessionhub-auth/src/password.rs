//! Password hashing and validation.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::{AuthError, AuthResult};

/// Bcrypt cost factor for password hashing when none is configured.
pub const BCRYPT_COST: u32 = DEFAULT_COST;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum password length (bcrypt has a 72-byte limit).
pub const MAX_PASSWORD_LENGTH: usize = 72;

/// Hash a password using bcrypt.
///
/// Runs on a blocking thread pool to avoid stalling the async runtime; the
/// salt is generated per call, so hashing the same password twice yields
/// different hashes.
///
/// # Arguments
/// * `password` - Plain text password to hash
/// * `cost` - Optional bcrypt cost (defaults to `BCRYPT_COST`)
///
/// # Errors
/// Returns `AuthError::Hashing` if bcrypt fails.
pub async fn hash_password(password: &str, cost: Option<u32>) -> AuthResult<String> {
    let password = password.to_string();
    let cost = cost.unwrap_or(BCRYPT_COST);

    tokio::task::spawn_blocking(move || {
        hash(password, cost).map_err(|e| AuthError::Hashing(e.to_string()))
    })
    .await
    .map_err(|e| AuthError::Hashing(format!("Task join error: {}", e)))?
}

/// Verify a password against a bcrypt hash.
///
/// Bcrypt's comparison is constant-time with respect to the hash contents.
/// Runs on a blocking thread pool.
///
/// # Returns
/// `Ok(true)` if the password matches, `Ok(false)` if not.
///
/// # Errors
/// Returns `AuthError::Hashing` if the stored hash is not parseable.
pub async fn verify_password(password: &str, hash: &str) -> AuthResult<bool> {
    let password = password.to_string();
    let hash = hash.to_string();

    tokio::task::spawn_blocking(move || {
        verify(password, &hash).map_err(|e| AuthError::Hashing(e.to_string()))
    })
    .await
    .map_err(|e| AuthError::Hashing(format!("Task join error: {}", e)))?
}

/// Validate that a password meets the length policy.
///
/// # Errors
/// Returns `AuthError::WeakPassword` with the specific reason.
pub fn validate_password(password: &str) -> AuthResult<()> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Password must be at most {} characters",
            MAX_PASSWORD_LENGTH
        )));
    }
    Ok(())
}
