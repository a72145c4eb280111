//! Signed access token issuance and verification.
//!
//! Tokens are HS256 JWTs carrying only the standard claims: subject (user
//! id), issuer, issued-at, and expiry. Expiry is a fixed duration from
//! issuance and is not configurable per call. Verification is purely
//! computational — it never touches the store, so it cannot detect a user
//! deleted after issuance (accepted limitation).

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sessionhub_commons::UserId;

use crate::error::{AuthError, AuthResult};

/// Fixed token lifetime in days.
pub const TOKEN_TTL_DAYS: i64 = 30;

/// Issuer embedded in every SessionHub token.
pub const SESSIONHUB_ISSUER: &str = "sessionhub";

/// JWT claims for SessionHub access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Issuer
    pub iss: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    /// Create claims for a user with the standard 30-day lifetime.
    pub fn new(user_id: &UserId) -> Self {
        Self::with_ttl(user_id, Duration::days(TOKEN_TTL_DAYS))
    }

    /// Create claims with an explicit lifetime. Exposed for expiry tests.
    pub fn with_ttl(user_id: &UserId, ttl: Duration) -> Self {
        let now = Utc::now();
        let exp = now + ttl;
        Self {
            sub: user_id.to_string(),
            iss: SESSIONHUB_ISSUER.to_string(),
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
        }
    }
}

/// Sign claims into a token string.
///
/// # Errors
/// Returns `AuthError::Hashing` if encoding fails.
pub fn sign_token(claims: &Claims, secret: &str) -> AuthResult<String> {
    let header = Header::new(Algorithm::HS256);
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &encoding_key)
        .map_err(|e| AuthError::Hashing(format!("JWT encoding error: {}", e)))
}

/// Verify a token's signature, issuer, and expiry, returning the subject id.
///
/// # Errors
/// * `AuthError::TokenExpired` - signature valid but `exp` has passed
/// * `AuthError::InvalidToken` - bad signature, malformed payload, or wrong issuer
pub fn verify_token(token: &str, secret: &str) -> AuthResult<UserId> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[SESSIONHUB_ISSUER]);

    let data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken(e.to_string()),
    })?;

    Ok(UserId::new(data.claims.sub))
}
