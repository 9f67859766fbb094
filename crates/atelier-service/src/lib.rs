//! # atelier-service
//!
//! Business logic service layer for Atelier. Each service receives the
//! call-scoped [`Identity`] explicitly and enforces owner-scoped access
//! before touching storage.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references to the store traits.

pub mod auth;
pub mod client;
pub mod context;
pub mod ownership;
pub mod project;
pub mod task;
pub mod user;

pub use auth::{AuthService, TokenGrant};
pub use client::ClientService;
pub use context::{CurrentUser, Identity};
pub use project::ProjectService;
pub use task::TaskService;
pub use user::UserService;
