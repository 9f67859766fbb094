//! Registration and login flows.

pub mod service;

pub use service::{AuthService, LoginRequest, RegisterRequest, TokenGrant};
