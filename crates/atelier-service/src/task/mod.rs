//! Tasks — work items inside a project.

pub mod service;

pub use service::{CreateTaskRequest, TaskService, UpdateTaskRequest};
