//! Client records — the people and companies a studio bills.

pub mod service;

pub use service::{ClientService, CreateClientRequest, UpdateClientRequest};
