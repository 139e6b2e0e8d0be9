//! Value types shared by the chunk builder and its callers

use crate::{ParsingError, ParsingResult};
use std::ops::Range;

/// Default token budget per chunk
pub const DEFAULT_CHUNK_SIZE_TOKENS: usize = 300;

/// Default fraction of the budget reused as overlap
pub const DEFAULT_OVERLAP_RATIO: f64 = 0.1;

/// A trimmed, non-empty sentence tagged with its 1-based source page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    pub page: u32,
}

impl Sentence {
    pub fn new(text: impl Into<String>, page: u32) -> Self {
        Self {
            text: text.into(),
            page,
        }
    }
}

/// A packed span of consecutive sentences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Sentences joined by a single space
    pub text: String,
    /// Pages touched by any sentence, ascending and deduplicated
    pub pages: Vec<u32>,
    /// Sum of the sentence token counts
    pub token_count: usize,
    /// Indices of the packed sentences in the builder input
    pub sentence_range: Range<usize>,
}

impl Chunk {
    /// Number of sentences packed into this chunk
    pub fn sentence_count(&self) -> usize {
        self.sentence_range.len()
    }

    /// Comma-joined page list, e.g. `"3,4"`
    pub fn page_range(&self) -> String {
        self.pages
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Token budget and overlap policy for one build
///
/// Fields are private so every instance has passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkingParameters {
    chunk_size_tokens: usize,
    overlap_ratio: f64,
}

impl ChunkingParameters {
    /// Validate and build parameters
    ///
    /// # Errors
    /// Returns `ParsingError::InvalidParameters` when `chunk_size_tokens` is zero
    /// or `overlap_ratio` is not a finite value in `[0, 1)`
    pub fn new(chunk_size_tokens: usize, overlap_ratio: f64) -> ParsingResult<Self> {
        if chunk_size_tokens == 0 {
            return Err(ParsingError::invalid_parameters(
                "chunk_size_tokens must be at least 1",
            ));
        }
        if !overlap_ratio.is_finite() || !(0.0..1.0).contains(&overlap_ratio) {
            return Err(ParsingError::invalid_parameters(format!(
                "overlap_ratio must be in [0, 1), got {overlap_ratio}"
            )));
        }

        Ok(Self {
            chunk_size_tokens,
            overlap_ratio,
        })
    }

    pub fn chunk_size_tokens(&self) -> usize {
        self.chunk_size_tokens
    }

    pub fn overlap_ratio(&self) -> f64 {
        self.overlap_ratio
    }

    /// `floor(chunk_size_tokens * overlap_ratio)`
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn overlap_tokens(&self) -> usize {
        (self.chunk_size_tokens as f64 * self.overlap_ratio).floor() as usize
    }
}

impl Default for ChunkingParameters {
    fn default() -> Self {
        Self {
            chunk_size_tokens: DEFAULT_CHUNK_SIZE_TOKENS,
            overlap_ratio: DEFAULT_OVERLAP_RATIO,
        }
    }
}
