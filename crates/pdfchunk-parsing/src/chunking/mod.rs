//! Token counting and chunk packing

pub mod builder;
pub mod registry;
pub mod tiktoken_counter;
pub mod traits;
pub mod types;
pub mod whitespace_counter;

pub use builder::ChunkBuilder;
pub use registry::counter_for_encoding;
pub use tiktoken_counter::{TIKTOKEN_ENCODINGS, TiktokenCounter};
pub use traits::{TokenCodec, TokenCounter, TokenCounterRef};
pub use types::{
    Chunk, ChunkingParameters, DEFAULT_CHUNK_SIZE_TOKENS, DEFAULT_OVERLAP_RATIO, Sentence,
};
pub use whitespace_counter::WhitespaceCounter;
