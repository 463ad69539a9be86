//! # HTTP Server
//!
//! Binds the listing routes, health check and metrics into one server.

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;

use crate::observability::{log_event, log_event_with_fields, Event};
use crate::rest_api::RestServer;
use crate::service::ListingService;
use crate::store::ListingStore;

use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, observability_routes};
use super::request_log::log_requests;

/// HTTP server for the listing service
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    pub fn new<S: ListingStore + 'static>(
        config: HttpServerConfig,
        service: Arc<ListingService<S>>,
    ) -> Self {
        let router = Self::build_router(service);
        Self { config, router }
    }

    /// Combined router with all endpoints
    pub fn build_router<S: ListingStore + 'static>(service: Arc<ListingService<S>>) -> Router {
        let metrics = Arc::clone(service.metrics());

        Router::new()
            .merge(health_routes())
            .nest("/observability", observability_routes(metrics))
            .merge(RestServer::new(service).router())
            .layer(middleware::from_fn(log_requests))
    }

    /// Configured `host:port`
    pub fn bind_address(&self) -> String {
        self.config.bind_address()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr()?;
        let listener = TcpListener::bind(addr).await?;
        log_event_with_fields(Event::ServerListening, &[("addr", addr.to_string().as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ServerStopped);
        Ok(())
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed, run until killed.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
