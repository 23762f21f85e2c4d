//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading, writing or editing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read or parsed.
    #[error("failed to read config {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    /// The file could not be written.
    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No such `section.key`.
    #[error("unknown configuration key '{0}'")]
    UnknownKey(String),

    /// A value failed validation.
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}
