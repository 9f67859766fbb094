//! sqlx repository implementations for all Atelier entities.

pub mod client;
pub mod project;
pub mod task;
pub mod user;

pub use client::ClientRepository;
pub use project::ProjectRepository;
pub use task::TaskRepository;
pub use user::UserRepository;
