//! CLI errors
//!
//! All CLI errors are fatal: `main` prints the error and exits non-zero.
//! Each variant carries a stable code prefix for scripts that grep output.

use std::io;

use thiserror::Error;

use crate::store::StoreError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Config file unreadable, malformed or out of range
    #[error("PROPSEARCH_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    #[error("PROPSEARCH_CLI_IO_ERROR: {0}")]
    Io(#[from] io::Error),

    /// Database could not be opened or its schema applied
    #[error("PROPSEARCH_CLI_STORE_ERROR: {0}")]
    Store(#[from] StoreError),

    /// Runtime or listener failure
    #[error("PROPSEARCH_CLI_BOOT_FAILED: {0}")]
    Boot(String),
}

impl CliError {
    pub fn config(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }

    pub fn boot(msg: impl Into<String>) -> Self {
        CliError::Boot(msg.into())
    }

    /// Stable code string
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "PROPSEARCH_CLI_CONFIG_ERROR",
            CliError::Io(_) => "PROPSEARCH_CLI_IO_ERROR",
            CliError::Store(_) => "PROPSEARCH_CLI_STORE_ERROR",
            CliError::Boot(_) => "PROPSEARCH_CLI_BOOT_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::config("http.port must be > 0");
        assert_eq!(err.to_string(), "PROPSEARCH_CLI_CONFIG_ERROR: http.port must be > 0");
        assert_eq!(err.code(), "PROPSEARCH_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_io_error_converts() {
        let err: CliError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.code(), "PROPSEARCH_CLI_IO_ERROR");
        assert!(err.to_string().ends_with("gone"));
    }
}
