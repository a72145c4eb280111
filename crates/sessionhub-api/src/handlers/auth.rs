//! Registration and login handlers.

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use sessionhub_auth::CredentialService;

use super::map_auth_error;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};

/// POST /api/auth/register
///
/// Creates an account and returns the new user's public identity with an
/// access token. The password hash never leaves the server.
pub async fn register_handler(
    credentials: web::Data<Arc<CredentialService>>,
    body: web::Json<RegisterRequest>,
) -> HttpResponse {
    let user = match credentials.register(&body.email, &body.password).await {
        Ok(user) => user,
        Err(err) => return map_auth_error(err),
    };

    let token = match credentials.issue_token(&user.id) {
        Ok(token) => token,
        Err(err) => return map_auth_error(err),
    };

    HttpResponse::Created().json(AuthResponse {
        id: user.id.into_string(),
        email: user.email,
        token,
    })
}

/// POST /api/auth/login
///
/// Verifies credentials and returns a fresh access token.
pub async fn login_handler(
    credentials: web::Data<Arc<CredentialService>>,
    body: web::Json<LoginRequest>,
) -> HttpResponse {
    let user = match credentials
        .verify_credentials(&body.email, &body.password)
        .await
    {
        Ok(user) => user,
        Err(err) => return map_auth_error(err),
    };

    let token = match credentials.issue_token(&user.id) {
        Ok(token) => token,
        Err(err) => return map_auth_error(err),
    };

    HttpResponse::Ok().json(AuthResponse {
        id: user.id.into_string(),
        email: user.email,
        token,
    })
}
