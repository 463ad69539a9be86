//! Store error types
//!
//! Persistence failures are opaque to clients: the HTTP boundary reports
//! them as internal errors and nothing here retries.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database file could not be opened
    #[error("failed to open database at {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    /// Parent directory for the database could not be created
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Schema creation or connection setup failed
    #[error("failed to apply schema: {0}")]
    Schema(#[source] rusqlite::Error),

    /// A stored row could not be read back into the model
    #[error("invalid stored row: {0}")]
    InvalidRow(String),

    /// Statement execution failed
    #[error("database error: {0}")]
    Sqlite(rusqlite::Error),

    /// A previous holder of the connection panicked
    #[error("connection lock poisoned")]
    LockPoisoned,
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::FromSqlConversionFailure(column, _, source) => {
                StoreError::InvalidRow(format!("column {}: {}", column, source))
            }
            other => StoreError::Sqlite(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_failure_maps_to_invalid_row() {
        let source = Box::new(crate::model::UnknownVariant("castle".to_string()));
        let err = StoreError::from(rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            source,
        ));

        assert!(matches!(err, StoreError::InvalidRow(_)));
        assert!(err.to_string().contains("castle"));
    }

    #[test]
    fn test_other_errors_are_opaque() {
        let err = StoreError::from(rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(err, StoreError::Sqlite(_)));
    }
}
