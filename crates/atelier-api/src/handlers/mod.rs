//! HTTP request handlers.

pub mod auth;
pub mod client;
pub mod health;
pub mod project;
pub mod task;
pub mod user;
