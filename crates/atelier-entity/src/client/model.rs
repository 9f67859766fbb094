//! Client entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A client a user does work for.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    /// Unique client identifier.
    pub id: Uuid,
    /// Client name.
    pub name: String,
    /// Contact email (optional).
    pub email: Option<String>,
    /// The owning user. Stamped at creation; the column is nullable and an
    /// unowned row is invisible to every owner-scoped query.
    pub owner_id: Option<Uuid>,
    /// When the client was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClient {
    /// Client name.
    pub name: String,
    /// Contact email (optional).
    pub email: Option<String>,
    /// The owning user.
    pub owner_id: Uuid,
}
