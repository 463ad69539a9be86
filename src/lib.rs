//! propsearch - a small real-estate listing search service
//!
//! Properties (house, apartment, condo) own spaces (bedroom, kitchen,
//! bathroom, living room). The service filters, sorts and paginates both,
//! creates and replaces properties with their spaces atomically, and reports
//! average space size overall and per property.
//!
//! Layers, bottom up:
//! - `model`, `validation`, `query`: plain types and rules
//! - `store`: SQLite persistence behind the `ListingStore` trait
//! - `service`: the operations, with logging and counters
//! - `rest_api`, `http_server`: axum routes
//! - `cli`: config loading and process entry

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod query;
pub mod rest_api;
pub mod service;
pub mod store;
pub mod validation;
