//! pdfchunk parsing and chunking crate
//!
//! Turns per-page text into sentences and packs those sentences into
//! token-bounded, overlapping chunks. Token counting and sentence
//! segmentation are injectable so the packer can run against fakes.

pub mod chunking;
pub mod error;
pub mod segmentation;

// Re-export main types
pub use chunking::{
    Chunk, ChunkBuilder, ChunkingParameters, Sentence, TiktokenCounter, TokenCodec, TokenCounter,
    TokenCounterRef, WhitespaceCounter, counter_for_encoding,
};
pub use error::{ParsingError, ParsingResult};
pub use segmentation::{
    SentenceSegmenter, SentenceSegmenterRef, UnicodeSentenceSegmenter, sentences_for_pages,
};
