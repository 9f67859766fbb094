//! Principal directory lookups.

pub mod service;

pub use service::UserService;
