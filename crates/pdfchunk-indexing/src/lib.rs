//! Document indexing crate for pdfchunk
//!
//! Coordinates page extraction, sentence segmentation and chunk packing for
//! single documents and whole directories, and shapes the results into the
//! records a downstream embedding store consumes.

pub mod error;
pub mod extraction;
pub mod indexing;
pub mod records;

// Re-export error types
pub use error::{IndexerError, IndexerResult};

// Re-export main orchestration types
pub use extraction::{PageText, PageTextExtractor, PageTextExtractorRef, PdfTextExtractor};
pub use indexing::{BatchMode, BatchReport, ChunkRecord, DirectoryBatchDriver, DocumentPipeline};
pub use records::{DocumentCatalog, IndexRecord, RecordMetadata, TitleSummary, index_records};

// Re-export parsing types for convenience
pub use pdfchunk_parsing::{Chunk, ChunkingParameters, ParsingError, ParsingResult};
