//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use atelier_auth::RequestAuthenticator;
use atelier_core::config::AppConfig;
use atelier_service::{AuthService, ClientService, ProjectService, TaskService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Auth ─────────────────────────────────────────────────
    /// Per-request authentication gate
    pub authenticator: Arc<RequestAuthenticator>,

    // ── Services ─────────────────────────────────────────────
    /// Registration and login
    pub auth_service: Arc<AuthService>,
    /// User directory lookups
    pub user_service: Arc<UserService>,
    /// Client management
    pub client_service: Arc<ClientService>,
    /// Project management
    pub project_service: Arc<ProjectService>,
    /// Task management
    pub task_service: Arc<TaskService>,
}
