pub mod batch;
pub mod pipeline;

pub use batch::{BatchMode, BatchReport, ChunkRecord, DirectoryBatchDriver};
pub use pipeline::DocumentPipeline;
