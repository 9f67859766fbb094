//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password. The configured minimum length is enforced by the auth
    /// service, not here.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create client request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateClientRequest {
    /// Client name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Contact email.
    #[validate(email)]
    pub email: Option<String>,
}

/// Update client request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateClientRequest {
    /// Client name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Contact email.
    #[validate(email)]
    pub email: Option<String>,
    /// New owner. Omit to keep the current owner.
    pub owner_id: Option<Uuid>,
}

/// Create project request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProjectRequest {
    /// Project name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Client to link.
    pub client_id: Option<Uuid>,
}

/// Update project request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    /// Project name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// New owner. Omit to keep the current owner.
    pub owner_id: Option<Uuid>,
    /// Client link. Omit to clear an existing link.
    pub client_id: Option<Uuid>,
}

/// Create task request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Whether the task starts active.
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

/// Update task request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    /// Task name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Whether the task is active.
    pub active: bool,
}
