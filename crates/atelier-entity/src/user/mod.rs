//! User domain entities.

pub mod model;
pub mod role;

pub use model::{NewUser, User};
pub use role::Role;
