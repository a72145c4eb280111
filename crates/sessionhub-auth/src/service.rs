//! Credential service: registration, credential verification, token lifecycle.

use std::sync::Arc;

use chrono::Utc;
use log::debug;
use sessionhub_commons::{validation, User, UserId};

use crate::error::{AuthError, AuthResult};
use crate::jwt;
use crate::password;
use crate::settings::AuthSettings;
use crate::user_repo::UserRepository;

/// Issues and verifies credentials and access tokens.
///
/// Hashing happens exactly here at the point of password assignment — there
/// is no implicit hashing hook anywhere else.
pub struct CredentialService {
    repo: Arc<dyn UserRepository>,
    settings: AuthSettings,
}

impl CredentialService {
    pub fn new(repo: Arc<dyn UserRepository>, settings: AuthSettings) -> Self {
        Self { repo, settings }
    }

    /// Registers a new user and stores only the password hash.
    ///
    /// # Errors
    /// * `AuthError::InvalidEmail` / `AuthError::WeakPassword` - bad input
    /// * `AuthError::EmailTaken` - email already registered (case-insensitive)
    pub async fn register(&self, email: &str, raw_password: &str) -> AuthResult<User> {
        validation::validate_email(email).map_err(AuthError::InvalidEmail)?;
        password::validate_password(raw_password)?;

        let password_hash =
            password::hash_password(raw_password, self.settings.bcrypt_cost).await?;

        let user = User {
            id: UserId::generate(),
            email: email.to_string(),
            password_hash,
            is_admin: false,
            created_at: Utc::now(),
        };
        self.repo.insert_user(&user).await?;

        debug!("Registered user {}", user.id);
        Ok(user)
    }

    /// Verifies an email/password pair.
    ///
    /// Unknown email and wrong password both surface as
    /// `AuthError::InvalidCredentials`; no distinction is observable.
    pub async fn verify_credentials(&self, email: &str, raw_password: &str) -> AuthResult<User> {
        let Some(user) = self.repo.get_user_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials);
        };
        if !password::verify_password(raw_password, &user.password_hash).await? {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(user)
    }

    /// Issues a signed access token for a user. Fixed 30-day expiry.
    pub fn issue_token(&self, user_id: &UserId) -> AuthResult<String> {
        let claims = jwt::Claims::new(user_id);
        jwt::sign_token(&claims, &self.settings.jwt_secret)
    }

    /// Verifies a token and returns the embedded subject id.
    ///
    /// Purely computational; does not consult the store.
    pub fn verify_token(&self, token: &str) -> AuthResult<UserId> {
        jwt::verify_token(token, &self.settings.jwt_secret)
    }
}
