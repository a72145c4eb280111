//! Request and response DTOs.
//!
//! Wire names are part of the external contract: list query parameters are
//! camelCase (`startDate`, `endDate`), record fields are snake_case, and
//! error bodies are `{ "error": <code>, "message": <text> }`.

use serde::{Deserialize, Serialize};

/// POST /api/auth/register body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful register/login response. The token is an opaque bearer string;
/// there is no server-side session store.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub id: String,
    pub email: String,
    pub token: String,
}

/// Query parameters for both listing endpoints. `status` is only honored for
/// owned listings; the query builder overrides it for public ones.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub keyword: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}

/// POST /api/my-sessions/save-draft body.
#[derive(Debug, Deserialize)]
pub struct SaveDraftRequest {
    /// Existing record to patch; absent to create a new draft.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub content_url: Option<String>,
}

/// POST /api/my-sessions/publish body.
#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub id: String,
}

/// Error body shared by all endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
