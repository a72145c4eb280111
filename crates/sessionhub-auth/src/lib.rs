//! # sessionhub-auth
//!
//! Credential service and access control for SessionHub.
//!
//! Provides password hashing (bcrypt), signed access tokens (HS256 JWT), the
//! user repository, and the HTTP access gate that turns a bearer credential
//! into a [`Principal`] or a definitive `Unauthenticated` failure.
//!
//! The gate performs identity only; authorization scoping (which records a
//! principal may see or mutate) lives in `sessionhub-core`.

pub mod error;
pub mod gate;
pub mod jwt;
pub mod password;
pub mod service;
pub mod settings;
pub mod user_repo;

pub use error::{AuthError, AuthResult};
pub use gate::{AccessGate, Principal};
pub use service::CredentialService;
pub use settings::AuthSettings;
pub use user_repo::{StoreUserRepository, UserRepository};
