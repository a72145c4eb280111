//! Registered user model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::UserId;

/// A registered user.
///
/// `password_hash` is an opaque bcrypt hash. It is serialized for storage but
/// must never appear in an outward-facing response; the API layer builds its
/// own response DTOs that exclude it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier, assigned at registration.
    pub id: UserId,
    /// Email address. Unique case-insensitively across all users.
    pub email: String,
    /// Bcrypt hash of the user's password. Never serialized outward.
    pub password_hash: String,
    /// Reserved for future administrative features. Unused by core logic.
    #[serde(default)]
    pub is_admin: bool,
    /// Registration timestamp, set by the repository on insert.
    pub created_at: DateTime<Utc>,
}
