//! Session record model and lifecycle status.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{SessionId, UserId};

/// Lifecycle status of a session record.
///
/// `Draft` is the initial state. Publishing moves a record to `Published`;
/// any later edit through the save-draft path resets it to `Draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Draft,
    Published,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Draft => write!(f, "draft"),
            SessionStatus::Published => write!(f, "published"),
        }
    }
}

impl FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(SessionStatus::Draft),
            "published" => Ok(SessionStatus::Published),
            other => Err(format!("Unknown session status '{}'", other)),
        }
    }
}

/// A user-authored session record.
///
/// Ownership is exclusive and non-transferable: `user_id` is set at creation
/// and never reassigned. Timestamps are managed by the repository layer and
/// are never client-settable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique record identifier.
    pub id: SessionId,
    /// Id of the owning user. Immutable after creation.
    pub user_id: UserId,
    /// Non-empty title.
    pub title: String,
    /// Free-form tags. Order-insignificant for matching.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Absolute URL of the session content (http/https/ftp). Contents opaque.
    pub content_url: String,
    /// Current lifecycle status.
    pub status: SessionStatus,
    /// Creation timestamp, set once by the repository.
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp, updated by the repository on every write.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::Draft).unwrap(),
            "\"draft\""
        );
        assert_eq!(
            serde_json::to_string(&SessionStatus::Published).unwrap(),
            "\"published\""
        );
    }

    #[test]
    fn status_parses_from_str() {
        assert_eq!("draft".parse::<SessionStatus>(), Ok(SessionStatus::Draft));
        assert_eq!(
            "published".parse::<SessionStatus>(),
            Ok(SessionStatus::Published)
        );
        assert!("archived".parse::<SessionStatus>().is_err());
    }
}
