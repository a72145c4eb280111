//! User persistence for authentication flows.
//!
//! The repository abstraction lets the credential service work against any
//! document store. The store-backed implementation keeps two partitions:
//!
//! - `system_users` — user id → [`User`] document
//! - `system_users_by_email` — lowercased email → user id
//!
//! The email index is written with `put_if_absent`, so two concurrent
//! registrations for the same email cannot both succeed.

use std::sync::Arc;

use async_trait::async_trait;
use sessionhub_commons::{User, UserId};
use sessionhub_store::{EntityStore, Partition, StorageBackend};

use crate::error::{AuthError, AuthResult};

/// Abstraction over user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user, enforcing email uniqueness (case-insensitive).
    ///
    /// # Errors
    /// `AuthError::EmailTaken` when another user already claimed the email.
    async fn insert_user(&self, user: &User) -> AuthResult<()>;

    /// Looks a user up by email, case-insensitively.
    async fn get_user_by_email(&self, email: &str) -> AuthResult<Option<User>>;

    /// Looks a user up by id.
    async fn get_user_by_id(&self, id: &UserId) -> AuthResult<Option<User>>;
}

struct UserEntityStore {
    backend: Arc<dyn StorageBackend>,
}

impl EntityStore<UserId, User> for UserEntityStore {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> Partition {
        Partition::new("system_users")
    }
}

/// Store-backed [`UserRepository`].
pub struct StoreUserRepository {
    users: UserEntityStore,
}

impl StoreUserRepository {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            users: UserEntityStore { backend },
        }
    }

    fn email_index(&self) -> Partition {
        Partition::new("system_users_by_email")
    }

    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.users.backend
    }
}

#[async_trait]
impl UserRepository for StoreUserRepository {
    async fn insert_user(&self, user: &User) -> AuthResult<()> {
        let email_key = user.email.to_lowercase();

        // Claim the email first; losing the race surfaces as EmailTaken.
        let claimed = self.backend().put_if_absent(
            &self.email_index(),
            email_key.as_bytes(),
            user.id.as_str().as_bytes(),
        )?;
        if !claimed {
            return Err(AuthError::EmailTaken);
        }

        if let Err(e) = self.users.put(&user.id, user) {
            // Roll the index claim back so the email is not left dangling.
            let _ = self
                .backend()
                .delete(&self.email_index(), email_key.as_bytes());
            return Err(e.into());
        }
        Ok(())
    }

    async fn get_user_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        let email_key = email.to_lowercase();
        let Some(id_bytes) = self
            .backend()
            .get(&self.email_index(), email_key.as_bytes())?
        else {
            return Ok(None);
        };
        let id = UserId::new(String::from_utf8_lossy(&id_bytes).into_owned());
        Ok(self.users.get(&id)?)
    }

    async fn get_user_by_id(&self, id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.users.get(id)?)
    }
}
