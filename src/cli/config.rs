//! Configuration file handling
//!
//! ```json
//! {
//!   "database_path": "App_Data/propsearch.db",
//!   "log_level": "info",
//!   "http": { "host": "127.0.0.1", "port": 5005 }
//! }
//! ```
//!
//! Every field is optional; missing fields take the defaults above.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::Severity;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file; parent directories are created on open
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Minimum log severity: trace, info, warn or error
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_database_path() -> String {
    "App_Data/propsearch.db".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            log_level: default_log_level(),
            http: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or fall back to the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> CliResult<()> {
        if self.database_path.trim().is_empty() {
            return Err(CliError::config("database_path must not be empty"));
        }

        self.severity()?;

        if self.http.port == 0 {
            return Err(CliError::config("http.port must be > 0"));
        }

        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse()
            .map_err(|e: String| CliError::config(format!("Invalid log_level: {}", e)))
    }

    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.database_path)
    }

    /// Write this configuration as pretty JSON. Existing files are left alone;
    /// returns whether a file was written.
    pub fn write_if_absent(&self, path: &Path) -> CliResult<bool> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CliError::config(format!("Failed to encode config: {}", e)))?;
        fs::write(path, json + "\n")?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_object_takes_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.http.port, 5005);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let config = Config {
            log_level: "verbose".to_string(),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("log_level"));
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = Config::default();
        config.http.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_database_path_rejected() {
        let config = Config {
            database_path: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_write_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("conf").join("propsearch.json");

        let config = Config {
            database_path: dir.path().join("db.sqlite").display().to_string(),
            ..Config::default()
        };
        assert!(config.write_if_absent(&path).unwrap());
        assert!(!config.write_if_absent(&path).unwrap());

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.code(), "PROPSEARCH_CLI_CONFIG_ERROR");
    }
}
