//! Tiktoken-based token counter

use super::traits::{TokenCodec, TokenCounter};
use crate::{ParsingError, ParsingResult};
use tiktoken_rs::{CoreBPE, cl100k_base, o200k_base, p50k_base, r50k_base};

/// Encodings this counter can be built for
pub const TIKTOKEN_ENCODINGS: &[&str] = &["cl100k_base", "o200k_base", "p50k_base", "r50k_base"];

/// Token counter using a tiktoken byte-pair encoding
pub struct TiktokenCounter {
    /// Encoding name for identification
    encoding_name: String,
    /// The tiktoken encoder
    encoder: CoreBPE,
}

impl TiktokenCounter {
    /// Create a counter for the named encoding
    ///
    /// # Errors
    /// Returns `ParsingError::TokenCounting` for unknown encodings or if the
    /// vocabulary fails to load
    pub fn for_encoding(encoding_name: &str) -> ParsingResult<Self> {
        let encoder = match encoding_name {
            "cl100k_base" => cl100k_base(),
            "o200k_base" => o200k_base(),
            "p50k_base" => p50k_base(),
            "r50k_base" => r50k_base(),
            other => {
                return Err(ParsingError::token_counting(format!(
                    "unknown tiktoken encoding '{other}'"
                )));
            }
        }
        .map_err(|e| ParsingError::token_counting(format!("{encoding_name}: {e}")))?;

        Ok(Self {
            encoding_name: encoding_name.to_string(),
            encoder,
        })
    }

    /// The cl100k_base encoding used by GPT-4 class models
    ///
    /// # Errors
    /// Returns `ParsingError::TokenCounting` if the vocabulary fails to load
    pub fn cl100k() -> ParsingResult<Self> {
        Self::for_encoding("cl100k_base")
    }
}

impl TokenCounter for TiktokenCounter {
    fn name(&self) -> &str {
        &self.encoding_name
    }

    fn count(&self, text: &str) -> usize {
        self.encoder.encode_ordinary(text).len()
    }

    fn count_batch(&self, texts: &[&str]) -> Vec<usize> {
        texts
            .iter()
            .map(|text| self.encoder.encode_ordinary(text).len())
            .collect()
    }
}

impl TokenCodec for TiktokenCounter {
    #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
    fn encode(&self, text: &str) -> Vec<u32> {
        self.encoder
            .encode_ordinary(text)
            .into_iter()
            .map(|token| token as u32)
            .collect()
    }

    fn decode(&self, tokens: &[u32]) -> ParsingResult<String> {
        self.encoder
            .decode(tokens.iter().map(|&token| token as _).collect())
            .map_err(|e| ParsingError::token_counting(format!("decode failed: {e}")))
    }
}
