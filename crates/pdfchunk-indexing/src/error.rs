//! Error types for the indexing crate
//!
//! Batch-level failures (unreadable directory, invalid configuration) are
//! returned as errors. Per-file failures are caught by the batch driver and
//! recorded in the report instead.

use pdfchunk_common::CommonError;
use pdfchunk_config::ConfigError;
use pdfchunk_parsing::ParsingError;
use thiserror::Error;

/// Indexing-specific error types
#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Text could not be extracted from a document
    #[error("Extraction failed for '{file}': {message}")]
    Extraction { file: String, message: String },

    #[error(transparent)]
    Parsing(#[from] ParsingError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl IndexerError {
    /// Create an extraction failure for a file
    pub fn extraction(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Extraction {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create an IO error that keeps the underlying cause
    pub fn io_with_source(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(source),
        }
    }
}

impl CommonError for IndexerError {
    fn io_error(msg: impl Into<String>) -> Self {
        Self::Io {
            message: msg.into(),
            source: None,
        }
    }

    fn config_error(msg: impl Into<String>) -> Self {
        Self::Configuration {
            message: msg.into(),
        }
    }

    fn parse_error(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    fn other_error(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

impl From<std::io::Error> for IndexerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io {
            message: e.to_string(),
            source: Some(e),
        }
    }
}

impl From<anyhow::Error> for IndexerError {
    fn from(e: anyhow::Error) -> Self {
        Self::Other(e.to_string())
    }
}

/// Result type alias for indexing operations
pub type IndexerResult<T> = Result<T, IndexerError>;
