//! Unit tests for access token issuance and verification.

use chrono::Duration;
use sessionhub_auth::jwt::{sign_token, verify_token, Claims, SESSIONHUB_ISSUER};
use sessionhub_auth::AuthError;
use sessionhub_commons::UserId;

const SECRET: &str = "test-secret";

/// A signed token verifies and yields the embedded subject
#[test]
fn test_token_round_trip() {
    let user_id = UserId::generate();
    let claims = Claims::new(&user_id);
    assert_eq!(claims.iss, SESSIONHUB_ISSUER);

    let token = sign_token(&claims, SECRET).unwrap();
    let subject = verify_token(&token, SECRET).unwrap();
    assert_eq!(subject, user_id);
}

/// Verification fails with the wrong secret
#[test]
fn test_wrong_secret_rejected() {
    let token = sign_token(&Claims::new(&UserId::generate()), SECRET).unwrap();

    let err = verify_token(&token, "other-secret").unwrap_err();
    assert!(matches!(err, AuthError::InvalidToken(_)));
}

/// Tampering with the payload invalidates the signature
#[test]
fn test_tampered_token_rejected() {
    let token = sign_token(&Claims::new(&UserId::generate()), SECRET).unwrap();

    // Flip a character in the payload segment
    let mut parts: Vec<String> = token.split('.').map(|s| s.to_string()).collect();
    assert_eq!(parts.len(), 3);
    let mut payload: Vec<char> = parts[1].chars().collect();
    payload[0] = if payload[0] == 'A' { 'B' } else { 'A' };
    parts[1] = payload.into_iter().collect();
    let tampered = parts.join(".");

    assert!(verify_token(&tampered, SECRET).is_err());
}

/// An expired token fails with TokenExpired
#[test]
fn test_expired_token_rejected() {
    let user_id = UserId::generate();
    // Expired two minutes ago, outside jsonwebtoken's default leeway
    let claims = Claims::with_ttl(&user_id, Duration::minutes(-2));
    let token = sign_token(&claims, SECRET).unwrap();

    let err = verify_token(&token, SECRET).unwrap_err();
    assert!(matches!(err, AuthError::TokenExpired));
}

/// Garbage strings are not tokens
#[test]
fn test_malformed_token_rejected() {
    assert!(verify_token("not-a-token", SECRET).is_err());
    assert!(verify_token("", SECRET).is_err());
}
