//! # atelier-entity
//!
//! Domain entity models for Atelier. Every struct in this crate represents
//! a database table row or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod client;
pub mod project;
pub mod task;
pub mod user;

pub use client::{Client, NewClient};
pub use project::{NewProject, Project};
pub use task::{NewTask, Task};
pub use user::{NewUser, Role, User};
