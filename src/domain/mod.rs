//! Domain layer: models, errors, and the port traits the infrastructure
//! adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
