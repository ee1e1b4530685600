//! Orchestration layer between the HTTP boundary and the repository.

pub mod campaign;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};
