//! # atelier-database
//!
//! PostgreSQL connection management, per-entity store traits, and their
//! concrete implementations: sqlx repositories for production and
//! tokio-mutex in-memory stores for tests and single-node experiments.
//!
//! Services depend on the [`stores`] traits only; which implementation
//! backs them is wiring.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod stores;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use stores::{ClientStore, ProjectStore, TaskStore, UserStore};
