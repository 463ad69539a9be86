//! Validation error types
//!
//! Each variant renders the exact message returned to the client. Only the
//! first violation of a request is ever reported.

use thiserror::Error;

use crate::model::{PropertyType, SpaceType};

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A write request violated a constraint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Address missing, empty or whitespace
    #[error("address is required")]
    AddressRequired,

    /// Property type missing or outside the allowed set
    #[error("type must be one of: {}", PropertyType::allowed())]
    InvalidPropertyType,

    /// Price zero, negative or not a number
    #[error("price must be positive")]
    NonPositivePrice,

    /// A space type outside the allowed set
    #[error("space.type must be one of: {}", SpaceType::allowed())]
    InvalidSpaceType,

    /// A space size zero, negative or not a number
    #[error("space.size must be positive")]
    NonPositiveSize,
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::AddressRequired => "address",
            ValidationError::InvalidPropertyType => "type",
            ValidationError::NonPositivePrice => "price",
            ValidationError::InvalidSpaceType => "space.type",
            ValidationError::NonPositiveSize => "space.size",
        }
    }
}
