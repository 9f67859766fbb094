//! Projects — units of studio work, optionally linked to a client.

pub mod service;

pub use service::{CreateProjectRequest, ProjectService, UpdateProjectRequest};
