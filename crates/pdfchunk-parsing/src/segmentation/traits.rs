//! Sentence segmentation contract

use std::sync::Arc;

/// Splits one page of text into sentences in reading order
///
/// Output sentences are trimmed and non-empty. Whitespace-only input
/// yields no sentences. The same input always yields the same output.
pub trait SentenceSegmenter: Send + Sync {
    /// Get the name/identifier of this segmenter
    fn name(&self) -> &str;

    /// Segment a page of text
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Type alias for shared segmenter
pub type SentenceSegmenterRef = Arc<dyn SentenceSegmenter>;
