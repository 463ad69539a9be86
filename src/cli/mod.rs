//! CLI module
//!
//! - init: write a default config and create the database schema
//! - serve: open the database and serve HTTP

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliResult};
