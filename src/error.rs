//! Error types for race record storage and import/export.
//!
//! Aggregation functions in this crate are total: they treat missing optional
//! fields as "no data" and never return errors. The variants here cover the
//! fallible edges of the library instead:
//!
//! - **Storage errors**: reading or writing the record store file
//! - **Serialization errors**: malformed JSON on load or import
//! - **CSV errors**: export/import through the CSV codec
//! - **Parse errors**: individual fields that cannot be interpreted
//! - **Backup errors**: bundles that fail structural validation
//!
//! ## Helper Constructors
//!
//! Use helper methods for common error scenarios:
//!
//! ```rust
//! use paddock::PaddockError;
//! use std::path::PathBuf;
//!
//! let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
//! let storage_error = PaddockError::storage(PathBuf::from("/data/races.json"), io_err);
//!
//! let parse_error = PaddockError::parse("CSV import", "invalid week number");
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for paddock operations.
pub type Result<T, E = PaddockError> = std::result::Result<T, E>;

/// Main error type for record storage and import/export operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PaddockError {
    #[error("storage error: {path}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("parse error in {context}: {details}")]
    Parse { context: String, details: String },

    #[error("race '{id}' not found")]
    NotFound { id: String },

    #[error("invalid backup: {reason}")]
    InvalidBackup { reason: String },
}

impl PaddockError {
    /// Helper constructor for storage errors with path context.
    pub fn storage(path: PathBuf, source: std::io::Error) -> Self {
        PaddockError::Storage { path, source }
    }

    /// Helper constructor for parse errors.
    pub fn parse(context: impl Into<String>, details: impl Into<String>) -> Self {
        PaddockError::Parse { context: context.into(), details: details.into() }
    }

    /// Helper constructor for missing-record errors.
    pub fn not_found(id: impl Into<String>) -> Self {
        PaddockError::NotFound { id: id.into() }
    }

    /// Helper constructor for backup validation failures.
    pub fn invalid_backup(reason: impl Into<String>) -> Self {
        PaddockError::InvalidBackup { reason: reason.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_constructors_validation() {
        let storage_error = PaddockError::storage(
            PathBuf::from("/test"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "test"),
        );
        assert!(matches!(storage_error, PaddockError::Storage { .. }));

        let parse_error = PaddockError::parse("CSV import", "bad field");
        assert!(matches!(parse_error, PaddockError::Parse { .. }));

        let missing = PaddockError::not_found("abc123");
        assert!(missing.to_string().contains("abc123"));
    }

    #[test]
    fn error_traits_validation() {
        // Compile-time check: PaddockError must be Send + Sync + 'static
        fn assert_send_sync_static<T: Send + Sync + 'static>() {}
        assert_send_sync_static::<PaddockError>();

        let error = PaddockError::parse("test", "test");
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn from_conversions_work() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let converted: PaddockError = json_err.into();
        assert!(matches!(converted, PaddockError::Serialization(_)));
    }

    #[test]
    fn error_messages_carry_context() {
        let error = PaddockError::parse("backup import", "timestamp missing");
        let message = error.to_string();
        assert!(message.contains("backup import"));
        assert!(message.contains("timestamp missing"));
    }
}
