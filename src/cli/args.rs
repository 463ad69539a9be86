//! CLI argument definitions using clap
//!
//! Commands:
//! - propsearch init [--config <path>]
//! - propsearch serve [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// propsearch - real-estate listing search service
#[derive(Parser, Debug)]
#[command(name = "propsearch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default config (if absent) and create the database schema
    Init {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Open the database and serve HTTP until Ctrl-C
    Serve {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured HTTP port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_without_config() {
        let cli = Cli::try_parse_from(["propsearch", "serve"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert!(config.is_none());
                assert!(port.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_init_with_config() {
        let cli = Cli::try_parse_from(["propsearch", "init", "--config", "ps.json"]).unwrap();
        match cli.command {
            Command::Init { config } => assert_eq!(config, Some(PathBuf::from("ps.json"))),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_serve_port_override() {
        let cli = Cli::try_parse_from(["propsearch", "serve", "--port", "8081"]).unwrap();
        assert!(matches!(cli.command, Command::Serve { port: Some(8081), .. }));
    }
}
