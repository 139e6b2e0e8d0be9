//! Error types for the parsing crate
//!
//! Covers parameter validation, tokenizer construction and segmentation.
//! Packing itself never fails.

use pdfchunk_common::{CommonError, impl_common_conversions};
use thiserror::Error;

/// Parsing-specific error types
#[derive(Error, Debug)]
pub enum ParsingError {
    /// Chunking parameters rejected before packing starts
    #[error("Invalid chunking parameters: {0}")]
    InvalidParameters(String),

    /// Tokenizer could not be built or could not decode
    #[error("Token counting error: {0}")]
    TokenCounting(String),

    /// Sentence segmentation failed
    #[error("Segmentation error: {0}")]
    Segmentation(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),

    /// Other error (fallback)
    #[error("Other error: {0}")]
    Other(String),
}

impl ParsingError {
    /// Create an invalid-parameters error
    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }

    /// Create a token counting error
    pub fn token_counting(msg: impl Into<String>) -> Self {
        Self::TokenCounting(msg.into())
    }
}

impl CommonError for ParsingError {
    fn io_error(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    fn config_error(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }

    fn parse_error(msg: impl Into<String>) -> Self {
        Self::Segmentation(msg.into())
    }

    fn other_error(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

impl_common_conversions!(ParsingError);

/// Result type alias for parsing operations
pub type ParsingResult<T> = Result<T, ParsingError>;
