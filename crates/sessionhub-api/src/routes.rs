//! API route configuration.

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::handlers;

/// Configure all SessionHub API routes.
///
/// - POST /api/auth/register
/// - POST /api/auth/login
/// - GET  /api/sessions
/// - GET  /api/my-sessions
/// - GET  /api/my-sessions/{id}
/// - POST /api/my-sessions/save-draft
/// - POST /api/my-sessions/publish
/// - GET  /api/healthcheck
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(handlers::register_handler))
                    .route("/login", web::post().to(handlers::login_handler)),
            )
            .route("/sessions", web::get().to(handlers::list_public_handler))
            .route("/my-sessions", web::get().to(handlers::list_owned_handler))
            .route(
                "/my-sessions/save-draft",
                web::post().to(handlers::save_draft_handler),
            )
            .route(
                "/my-sessions/publish",
                web::post().to(handlers::publish_handler),
            )
            .route(
                "/my-sessions/{id}",
                web::get().to(handlers::get_owned_handler),
            )
            .route("/healthcheck", web::get().to(healthcheck_handler)),
    );
}

/// Health check endpoint handler
async fn healthcheck_handler() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
