//! # atelier-auth
//!
//! Stateless authentication primitives for the Atelier backend.
//!
//! ## Modules
//!
//! - `jwt` — token codec: issue, verify, and extract subjects from signed
//!   bearer tokens
//! - `password` — Argon2id password hashing and verification
//! - `authenticator` — turns an `Authorization` header into a resolved
//!   principal, degrading to anonymous on any failure

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::RequestAuthenticator;
pub use jwt::{Claims, TokenCodec};
pub use password::PasswordHasher;
