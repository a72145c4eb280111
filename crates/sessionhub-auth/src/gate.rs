//! HTTP access gate.
//!
//! Extracts a bearer credential from an inbound request and verifies it,
//! producing a [`Principal`] or a definitive `Unauthenticated`-class failure.
//!
//! Owned-resource endpoints call [`AccessGate::required`]; public endpoints
//! call [`AccessGate::optional`], where a missing header means "proceed with
//! no principal" but a present-yet-invalid token is still rejected. The gate
//! performs no authorization beyond identity.

use std::sync::Arc;

use actix_web::HttpRequest;
use log::debug;
use sessionhub_commons::UserId;

use crate::error::{AuthError, AuthResult};
use crate::service::CredentialService;

/// The authenticated identity derived from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
}

/// Verifies bearer tokens on inbound requests.
#[derive(Clone)]
pub struct AccessGate {
    credentials: Arc<CredentialService>,
}

impl AccessGate {
    pub fn new(credentials: Arc<CredentialService>) -> Self {
        Self { credentials }
    }

    /// Authenticate a request that requires a principal.
    ///
    /// Rejects before any store access: token verification is purely
    /// computational.
    pub fn required(&self, req: &HttpRequest) -> AuthResult<Principal> {
        match self.bearer_token(req)? {
            Some(token) => self.verify(&token),
            None => Err(AuthError::MissingAuthorization),
        }
    }

    /// Authenticate a request where a principal is optional.
    ///
    /// A missing Authorization header yields `Ok(None)`. A header that is
    /// present but malformed, invalid, or expired is still an error.
    pub fn optional(&self, req: &HttpRequest) -> AuthResult<Option<Principal>> {
        match self.bearer_token(req)? {
            Some(token) => self.verify(&token).map(Some),
            None => Ok(None),
        }
    }

    fn verify(&self, token: &str) -> AuthResult<Principal> {
        let user_id = self.credentials.verify_token(token)?;
        debug!("Authenticated principal {}", user_id);
        Ok(Principal { user_id })
    }

    /// Pulls the bearer token out of the Authorization header, if present.
    fn bearer_token(&self, req: &HttpRequest) -> AuthResult<Option<String>> {
        let Some(header) = req.headers().get("Authorization") else {
            return Ok(None);
        };
        let header = header.to_str().map_err(|_| {
            AuthError::MalformedAuthorization(
                "Authorization header contains invalid characters".to_string(),
            )
        })?;

        if !header.starts_with("Bearer") {
            return Err(AuthError::MalformedAuthorization(
                "Authorization header must start with 'Bearer '".to_string(),
            ));
        }
        // Handle both "Bearer " and malformed "Bearer" without space
        let token = header.strip_prefix("Bearer").unwrap_or("").trim();
        if token.is_empty() {
            return Err(AuthError::MalformedAuthorization(
                "Bearer token missing".to_string(),
            ));
        }
        Ok(Some(token.to_string()))
    }
}
