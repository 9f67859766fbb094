//! Task entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A unit of work inside a project. Tasks carry no owner of their own;
/// ownership is transitive through the parent project.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique task identifier.
    pub id: Uuid,
    /// Task name.
    pub name: String,
    /// Whether the task is currently being worked on.
    pub active: bool,
    /// The parent project.
    pub project_id: Uuid,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    /// Task name.
    pub name: String,
    /// Whether the task starts active.
    pub active: bool,
    /// The parent project.
    pub project_id: Uuid,
}
