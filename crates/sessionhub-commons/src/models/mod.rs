//! Domain models for SessionHub.

pub mod ids;
pub mod session;
pub mod user;

pub use ids::{SessionId, UserId};
pub use session::{SessionRecord, SessionStatus};
pub use user::User;
