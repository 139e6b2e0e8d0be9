//! Configuration error types

use pdfchunk_common::CommonError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Missing or empty required field
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Integer value outside its accepted range
    #[error("Value {value} is out of range for {field} (expected {min}-{max})")]
    OutOfRange {
        field: String,
        value: u64,
        min: u64,
        max: u64,
    },

    /// Value that is the right type but not an accepted choice
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialization(#[from] toml::ser::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error message
    #[error("Configuration error: {message}")]
    Generic { message: String },
}

impl CommonError for ConfigError {
    fn io_error(msg: impl Into<String>) -> Self {
        Self::Io(std::io::Error::other(msg.into()))
    }

    fn config_error(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
        }
    }

    fn parse_error(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
        }
    }

    fn other_error(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
        }
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
