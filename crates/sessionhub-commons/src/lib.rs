//! # sessionhub-commons
//!
//! Shared types and utilities for SessionHub.
//!
//! This crate provides the foundational vocabulary used across all SessionHub
//! crates (sessionhub-store, sessionhub-auth, sessionhub-core, sessionhub-api):
//!
//! - Type-safe id wrappers: [`UserId`], [`SessionId`]
//! - Domain models: [`User`], [`SessionRecord`], [`SessionStatus`]
//! - The [`StorageKey`] trait used by the typed entity stores
//! - Explicit field validators in the [`validation`] module
//!
//! Models here are the single source of truth. Do not duplicate them in other
//! crates; import from `sessionhub_commons` instead.

pub mod models;
pub mod storage_key;
pub mod validation;

pub use models::ids::{SessionId, UserId};
pub use models::session::{SessionRecord, SessionStatus};
pub use models::user::User;
pub use storage_key::StorageKey;
