//! Trait definitions for token counting

use crate::ParsingResult;
use std::sync::Arc;

/// Trait for counting tokens in text
///
/// Implementations must be stateless across calls: the same text always
/// yields the same count, so callers may re-derive counts at will.
pub trait TokenCounter: Send + Sync {
    /// Get the name/identifier of this counter
    fn name(&self) -> &str;

    /// Count tokens in the given text
    fn count(&self, text: &str) -> usize;

    /// Count tokens for multiple texts
    fn count_batch(&self, texts: &[&str]) -> Vec<usize> {
        texts.iter().map(|text| self.count(text)).collect()
    }
}

/// A counter backed by a real vocabulary that can also round-trip token ids
pub trait TokenCodec: TokenCounter {
    /// Encode text to token ids, ignoring special tokens
    fn encode(&self, text: &str) -> Vec<u32>;

    /// Decode token ids back to text
    ///
    /// # Errors
    /// Returns `ParsingError::TokenCounting` for ids outside the vocabulary
    fn decode(&self, tokens: &[u32]) -> ParsingResult<String>;
}

/// Type alias for shared token counter
pub type TokenCounterRef = Arc<dyn TokenCounter>;
