//! # REST API Module
//!
//! HTTP endpoints for property search, lookup, creation and replacement,
//! space search and space statistics.

pub mod errors;
pub mod parser;
pub mod response;
pub mod server;

pub use errors::{ErrorResponse, RestError, RestResult};
pub use parser::{parse_property_query, parse_space_query};
pub use response::CreatedResponse;
pub use server::RestServer;
