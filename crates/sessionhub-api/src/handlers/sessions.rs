//! Session listing and lifecycle handlers.

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use sessionhub_auth::AccessGate;
use sessionhub_commons::SessionId;
use sessionhub_core::filters::{parse_end_date, parse_start_date};
use sessionhub_core::{DraftInput, SessionFilters, SessionService};

use super::{map_auth_error, map_core_error};
use crate::models::{ErrorResponse, ListQuery, PublishRequest, SaveDraftRequest};

/// Converts wire query parameters into typed filters, reporting every parse
/// failure at once.
fn parse_filters(query: &ListQuery) -> Result<SessionFilters, HttpResponse> {
    let mut filters = SessionFilters {
        keyword: query.keyword.clone(),
        ..SessionFilters::default()
    };
    let mut violations = Vec::new();

    if let Some(status) = query.status.as_deref().filter(|s| !s.is_empty()) {
        match status.parse() {
            Ok(status) => filters.status = Some(status),
            Err(message) => violations.push(message),
        }
    }
    if let Some(raw) = query.start_date.as_deref().filter(|s| !s.is_empty()) {
        match parse_start_date(raw) {
            Ok(instant) => filters.start_date = Some(instant),
            Err(message) => violations.push(message),
        }
    }
    if let Some(raw) = query.end_date.as_deref().filter(|s| !s.is_empty()) {
        match parse_end_date(raw) {
            Ok(date) => filters.end_date = Some(date),
            Err(message) => violations.push(message),
        }
    }

    if violations.is_empty() {
        Ok(filters)
    } else {
        Err(HttpResponse::BadRequest()
            .json(ErrorResponse::new("validation_error", violations.join("; "))))
    }
}

/// GET /api/sessions
///
/// Public listing. The gate runs in optional mode: no token is fine, but a
/// present-yet-invalid token is still rejected. Only published records are
/// ever returned, whatever filters the client supplies.
pub async fn list_public_handler(
    req: HttpRequest,
    gate: web::Data<AccessGate>,
    sessions: web::Data<Arc<SessionService>>,
    query: web::Query<ListQuery>,
) -> HttpResponse {
    if let Err(err) = gate.optional(&req) {
        return map_auth_error(err);
    }
    let filters = match parse_filters(&query) {
        Ok(filters) => filters,
        Err(response) => return response,
    };

    match sessions.list_public(&filters).await {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(err) => map_core_error(err),
    }
}

/// GET /api/my-sessions
///
/// Lists the caller's own records, drafts included unless a status filter is
/// supplied.
pub async fn list_owned_handler(
    req: HttpRequest,
    gate: web::Data<AccessGate>,
    sessions: web::Data<Arc<SessionService>>,
    query: web::Query<ListQuery>,
) -> HttpResponse {
    let principal = match gate.required(&req) {
        Ok(principal) => principal,
        Err(err) => return map_auth_error(err),
    };
    let filters = match parse_filters(&query) {
        Ok(filters) => filters,
        Err(response) => return response,
    };

    match sessions.list_owned(&principal.user_id, &filters).await {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(err) => map_core_error(err),
    }
}

/// GET /api/my-sessions/{id}
pub async fn get_owned_handler(
    req: HttpRequest,
    gate: web::Data<AccessGate>,
    sessions: web::Data<Arc<SessionService>>,
    path: web::Path<String>,
) -> HttpResponse {
    let principal = match gate.required(&req) {
        Ok(principal) => principal,
        Err(err) => return map_auth_error(err),
    };
    let id = SessionId::new(path.into_inner());

    match sessions.get_owned(&principal.user_id, &id).await {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(err) => map_core_error(err),
    }
}

/// POST /api/my-sessions/save-draft
///
/// Creates a new draft (201) or patches an existing one (200). Patching
/// always resets the record to draft.
pub async fn save_draft_handler(
    req: HttpRequest,
    gate: web::Data<AccessGate>,
    sessions: web::Data<Arc<SessionService>>,
    body: web::Json<SaveDraftRequest>,
) -> HttpResponse {
    let principal = match gate.required(&req) {
        Ok(principal) => principal,
        Err(err) => return map_auth_error(err),
    };

    let body = body.into_inner();
    let input = DraftInput {
        id: body.id.filter(|id| !id.is_empty()).map(SessionId::new),
        title: body.title,
        tags: body.tags,
        content_url: body.content_url,
    };

    match sessions.save_draft(&principal.user_id, input).await {
        Ok(saved) if saved.created => HttpResponse::Created().json(saved.record),
        Ok(saved) => HttpResponse::Ok().json(saved.record),
        Err(err) => map_core_error(err),
    }
}

/// POST /api/my-sessions/publish
pub async fn publish_handler(
    req: HttpRequest,
    gate: web::Data<AccessGate>,
    sessions: web::Data<Arc<SessionService>>,
    body: web::Json<PublishRequest>,
) -> HttpResponse {
    let principal = match gate.required(&req) {
        Ok(principal) => principal,
        Err(err) => return map_auth_error(err),
    };
    let id = SessionId::new(body.into_inner().id);

    match sessions.publish(&principal.user_id, &id).await {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(err) => map_core_error(err),
    }
}
