//! Token counter lookup by encoding name

use super::tiktoken_counter::{TIKTOKEN_ENCODINGS, TiktokenCounter};
use super::traits::TokenCounterRef;
use super::whitespace_counter::WhitespaceCounter;
use crate::{ParsingError, ParsingResult};
use std::sync::Arc;

/// Build a shared counter for a configured encoding name
///
/// Accepts every tiktoken encoding plus `whitespace`.
///
/// # Errors
/// Returns `ParsingError::TokenCounting` for unknown names
pub fn counter_for_encoding(encoding: &str) -> ParsingResult<TokenCounterRef> {
    if encoding == "whitespace" {
        return Ok(Arc::new(WhitespaceCounter::new()));
    }

    if TIKTOKEN_ENCODINGS.contains(&encoding) {
        tracing::debug!(encoding, "Loading tiktoken vocabulary");
        return Ok(Arc::new(TiktokenCounter::for_encoding(encoding)?));
    }

    Err(ParsingError::token_counting(format!(
        "unsupported encoding '{encoding}', expected one of: {}, whitespace",
        TIKTOKEN_ENCODINGS.join(", ")
    )))
}
