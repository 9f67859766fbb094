//! Project domain entities.

pub mod model;

pub use model::{NewProject, Project};
