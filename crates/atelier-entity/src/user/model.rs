//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::Role;

/// A registered principal in the Atelier system.
///
/// The email address is the unique identity; token subjects and directory
/// lookups use it verbatim (case-sensitive).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login identity.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Disabled accounts keep their rows but can never authenticate.
    pub active: bool,
    /// Granted roles; authorities derive from these 1:1.
    pub roles: Vec<Role>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if this user carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(Role::is_admin)
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Login identity.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Given name (optional).
    pub first_name: Option<String>,
    /// Family name (optional).
    pub last_name: Option<String>,
    /// Roles granted at creation.
    pub roles: Vec<Role>,
}
