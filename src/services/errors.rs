use thiserror::Error;

use crate::domain::campaign::DomainError;
use crate::repository::errors::RepositoryError;

/// Failures surfaced by the service layer.
///
/// Absent-or-deleted lookups are not errors; those operations report
/// `Ok(None)` or `Ok(false)` instead. `NotFound` here covers rows that
/// vanish mid-operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Business rule violation raised by the campaign entity.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Duplicate active campaign name.
    #[error("{0}")]
    Conflict(String),

    #[error("campaign not found")]
    NotFound,

    /// Storage or infrastructure failure; details stay server-side.
    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            // The partial unique index on active names is the authoritative
            // uniqueness guard; losing the check-then-insert race lands here.
            RepositoryError::ConstraintViolation(_) => {
                ServiceError::Conflict("a campaign with this name already exists".to_string())
            }
            other => ServiceError::Internal(other.to_string()),
        }
    }
}
