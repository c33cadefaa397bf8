//! Error types for sb-core

use thiserror::Error;

/// Core error type for Seedbed
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Invalid configuration value
    #[error("[E002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E003: Unknown fixture set name
    #[error("[E003] Unknown fixture set: {name}")]
    UnknownFixtureSet { name: String },

    /// E004: Fixture row has the wrong number of values
    #[error("[E004] Row {row} of table '{table}' has {found} values, expected {expected}")]
    ColumnCountMismatch {
        table: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// E005: NULL in a NOT NULL column
    #[error("[E005] Row {row} of table '{table}' has NULL in NOT NULL column '{column}'")]
    NullViolation {
        table: String,
        row: usize,
        column: String,
    },

    /// E006: Value does not fit the declared column type
    #[error("[E006] Row {row} of table '{table}': value for column '{column}' does not match declared type {expected}")]
    TypeMismatch {
        table: String,
        row: usize,
        column: String,
        expected: String,
    },

    /// E007: IO error
    #[error("[E007] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E008: IO error with file path context
    #[error("[E008] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E009: Config/YAML parse error
    #[error("[E009] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
