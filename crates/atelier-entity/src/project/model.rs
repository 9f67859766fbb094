//! Project entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A project belonging to a user, optionally linked to one of the
/// catalogued clients.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    /// Unique project identifier.
    pub id: Uuid,
    /// Project name.
    pub name: String,
    /// The owning user. Stamped at creation.
    pub owner_id: Option<Uuid>,
    /// Linked client, if any.
    pub client_id: Option<Uuid>,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    /// Project name.
    pub name: String,
    /// The owning user.
    pub owner_id: Uuid,
    /// Linked client, if any.
    pub client_id: Option<Uuid>,
}
