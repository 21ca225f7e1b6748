//! Core error types for fatigueboard-core.
//!
//! Boundary validation, snapshot storage and configuration each get their
//! own thiserror enum; [`CoreError`] collects them for callers that do not
//! care which layer failed.
//!
//! Malformed snapshot contents are not an error at this level: the loader
//! recovers by falling back to the initial state. Invalid input reaching
//! the fatigue model itself is a programming error and panics.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fatigueboard-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Boundary validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Snapshot storage errors
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Input rejected before it reaches the fatigue model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Muscle identifier is not part of the registry
    #[error("Unknown muscle group: '{0}'")]
    UnknownMuscle(String),

    /// Duration below one minute
    #[error("Invalid duration: {minutes} minutes (must be at least 1)")]
    InvalidMinutes { minutes: i64 },

    /// Load outside the 1-5 scale (strict constructor only)
    #[error("Invalid load: {load} (must be between 1 and 5)")]
    InvalidLoad { load: i64 },

    /// Load input that cannot be rounded to a number
    #[error("Invalid load input: {0}")]
    NonFiniteLoad(f64),

    /// Free-text note exceeds the allowed length
    #[error("Note too long: {len} characters (max {max})")]
    NoteTooLong { len: usize, max: usize },
}

/// Snapshot storage errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to resolve or create the data directory
    #[error("Failed to access data directory: {0}")]
    DataDir(String),

    /// Failed to read the snapshot file
    #[error("Failed to read snapshot at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the snapshot file
    #[error("Failed to write snapshot at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode the snapshot
    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to access the data directory
    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_converts_into_core_error() {
        let err: CoreError = ValidationError::UnknownMuscle("neck".into()).into();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation error: Unknown muscle group: 'neck'"
        );
    }

    #[test]
    fn store_error_keeps_path_in_message() {
        let err = StoreError::ReadFailed {
            path: PathBuf::from("/tmp/state.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/state.json"));
    }
}
