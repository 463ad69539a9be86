//! CLI command implementations

use std::path::Path;
use std::sync::Arc;

use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::service::ListingService;
use crate::store::SqliteStore;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(config.as_deref()),
        Command::Serve { config, port } => serve(config.as_deref(), port),
    }
}

/// Write a default config (when a path is given and nothing is there yet)
/// and create the database schema.
pub fn init(config_path: Option<&Path>) -> CliResult<()> {
    if let Some(path) = config_path {
        if Config::default().write_if_absent(path)? {
            log_event_with_fields(
                Event::ConfigLoaded,
                &[("path", path.display().to_string().as_str()), ("written", "true")],
            );
        }
    }

    let config = boot(config_path)?;
    open_store(&config)?;
    Ok(())
}

/// Open the store and serve HTTP until Ctrl-C
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = boot(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
        config.validate()?;
    }

    let store = open_store(&config)?;
    let service = Arc::new(ListingService::new(store));
    let server = HttpServer::new(config.http.clone(), service);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot(format!("HTTP server failed: {}", e)))
    })
}

/// Load config and apply the log level
fn boot(config_path: Option<&Path>) -> CliResult<Config> {
    log_event(Event::BootStart);

    let config = Config::load_or_default(config_path)?;
    Logger::set_min_severity(config.severity()?);

    let source = config_path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("database_path", config.database_path.as_str()),
            ("source", source.as_str()),
        ],
    );
    Ok(config)
}

fn open_store(config: &Config) -> CliResult<SqliteStore> {
    let store = SqliteStore::open(config.database_path())?;
    log_event_with_fields(
        Event::StoreOpened,
        &[("path", config.database_path.as_str())],
    );
    Ok(store)
}
