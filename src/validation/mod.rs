//! Write-path validation
//!
//! Checks property payloads against the allowed type sets and numeric
//! constraints before anything reaches the store.

mod errors;
mod validator;

pub use errors::{ValidationError, ValidationResult};
pub use validator::PropertyValidator;
