//! Authentication settings.

use serde::{Deserialize, Serialize};

/// Configuration for the credential service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
    /// Secret used to sign and verify access tokens (HS256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,

    /// Bcrypt work factor. `None` uses the bcrypt crate default (12).
    #[serde(default)]
    pub bcrypt_cost: Option<u32>,
}

fn default_jwt_secret() -> String {
    "sessionhub-dev-secret-change-in-production".to_string()
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            bcrypt_cost: None,
        }
    }
}
