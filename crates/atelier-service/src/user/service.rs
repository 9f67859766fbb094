//! User profile and directory lookups.

use std::sync::Arc;

use uuid::Uuid;

use atelier_core::error::AppError;
use atelier_core::result::AppResult;
use atelier_database::UserStore;
use atelier_entity::User;

use crate::context::Identity;

/// Read access to the user directory.
///
/// The directory is shared among authenticated users; these lookups have
/// no ownership dimension, only the authentication requirement.
pub struct UserService {
    /// Principal directory.
    users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish()
    }
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Gets the current principal's full profile.
    pub async fn me(&self, identity: &Identity) -> AppResult<User> {
        let me = identity.require()?;
        self.users
            .find_by_id(me.id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Looks up a user by primary key.
    pub async fn get(&self, identity: &Identity, id: Uuid) -> AppResult<User> {
        identity.require()?;
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Looks up a user by identity string. Case-sensitive exact match.
    pub async fn get_by_email(&self, identity: &Identity, email: &str) -> AppResult<User> {
        identity.require()?;
        self.users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
