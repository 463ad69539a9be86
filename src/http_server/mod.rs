//! # HTTP Server Module
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/properties`, `/spaces`, `/stats/spaces` - Listing API
//! - `/observability/metrics` - Counters

pub mod config;
pub mod observability_routes;
pub mod request_log;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
