//! # sessionhub-api
//!
//! HTTP surface of SessionHub: request/response DTOs, actix-web handlers,
//! and route configuration.
//!
//! Handlers are thin: they run the access gate, convert wire input into
//! typed filters and inputs, delegate to the credential service or session
//! lifecycle manager, and map domain errors 1:1 onto HTTP responses. No
//! ownership or visibility decision is made here.

pub mod handlers;
pub mod models;
pub mod routes;
