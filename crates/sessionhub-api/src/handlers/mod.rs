//! Request handlers and domain-error mapping.
//!
//! ## Endpoints
//! - POST /api/auth/register - Create an account, returns an access token
//! - POST /api/auth/login - Verify credentials, returns an access token
//! - GET /api/sessions - List published sessions (public)
//! - GET /api/my-sessions - List the caller's sessions
//! - GET /api/my-sessions/{id} - Fetch one owned session
//! - POST /api/my-sessions/save-draft - Create or patch a draft
//! - POST /api/my-sessions/publish - Transition a draft to published

pub mod auth;
pub mod sessions;

pub use auth::{login_handler, register_handler};
pub use sessions::{
    get_owned_handler, list_owned_handler, list_public_handler, publish_handler,
    save_draft_handler,
};

use actix_web::HttpResponse;
use sessionhub_auth::AuthError;
use sessionhub_core::CoreError;

use crate::models::ErrorResponse;

/// Map authentication errors to HTTP responses.
///
/// Credential and token failures collapse onto generic messages so that
/// "unknown email", "wrong password", and token problems are not
/// distinguishable by probing.
pub(crate) fn map_auth_error(err: AuthError) -> HttpResponse {
    match err {
        AuthError::EmailTaken => HttpResponse::Conflict()
            .json(ErrorResponse::new("conflict", "Email is already registered")),
        AuthError::InvalidCredentials => HttpResponse::Unauthorized()
            .json(ErrorResponse::new("unauthorized", "Invalid email or password")),
        AuthError::TokenExpired | AuthError::InvalidToken(_) => HttpResponse::Unauthorized()
            .json(ErrorResponse::new("unauthorized", "Invalid or expired token")),
        AuthError::MissingAuthorization | AuthError::MalformedAuthorization(_) => {
            HttpResponse::Unauthorized()
                .json(ErrorResponse::new("unauthorized", err.to_string()))
        }
        AuthError::InvalidEmail(message) | AuthError::WeakPassword(message) => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }
        AuthError::Hashing(_) | AuthError::Storage(_) => {
            log::error!("Auth infrastructure failure: {}", err);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("internal_error", "Authentication failed"))
        }
    }
}

/// Map session domain errors to HTTP responses.
pub(crate) fn map_core_error(err: CoreError) -> HttpResponse {
    match err {
        CoreError::NotFound => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            "Session not found or not owned by user",
        )),
        CoreError::Validation(violations) => HttpResponse::BadRequest()
            .json(ErrorResponse::new("validation_error", violations.join("; "))),
        CoreError::Storage(_) => {
            log::error!("Session store failure: {}", err);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("internal_error", "Storage failure"))
        }
    }
}
