//! Listing service errors

use thiserror::Error;

use crate::store::StoreError;
use crate::validation::ValidationError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Outcome taxonomy for listing operations
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The write request violated a constraint; nothing was persisted
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No property has this id
    #[error("property {0} not found")]
    NotFound(i64),

    /// Unclassified persistence failure
    #[error(transparent)]
    Store(#[from] StoreError),
}
