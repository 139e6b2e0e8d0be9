//! Single-document pipeline: extract, segment, chunk

use crate::extraction::{PageTextExtractorRef, PdfTextExtractor};
use crate::IndexerResult;
use pdfchunk_config::ApplicationConfig;
use pdfchunk_parsing::{
    Chunk, ChunkBuilder, ChunkingParameters, SentenceSegmenterRef, UnicodeSentenceSegmenter,
    counter_for_encoding, sentences_for_pages,
};
use std::path::Path;
use std::sync::Arc;

/// Runs one document through extractor, segmenter and chunk builder
pub struct DocumentPipeline {
    extractor: PageTextExtractorRef,
    segmenter: SentenceSegmenterRef,
    builder: ChunkBuilder,
}

impl DocumentPipeline {
    pub fn new(
        extractor: PageTextExtractorRef,
        segmenter: SentenceSegmenterRef,
        builder: ChunkBuilder,
    ) -> Self {
        Self {
            extractor,
            segmenter,
            builder,
        }
    }

    /// PDF extraction, Unicode segmentation and the configured tokenizer
    ///
    /// # Errors
    /// Returns `IndexerError::Parsing` for invalid chunk parameters or an
    /// unknown encoding
    pub fn from_config(config: &ApplicationConfig) -> IndexerResult<Self> {
        let counter = counter_for_encoding(&config.chunking.encoding)?;
        let params = ChunkingParameters::new(
            config.chunking.chunk_size_tokens,
            config.chunking.overlap_ratio,
        )?;

        Ok(Self::new(
            Arc::new(PdfTextExtractor::new()),
            Arc::new(UnicodeSentenceSegmenter::new()),
            ChunkBuilder::new(counter, params),
        ))
    }

    pub fn builder(&self) -> &ChunkBuilder {
        &self.builder
    }

    /// Chunk one document
    ///
    /// # Errors
    /// Propagates extraction failures for this document
    pub fn process(&self, path: &Path) -> IndexerResult<Vec<Chunk>> {
        let pages = self.extractor.extract(path)?;
        let sentences = sentences_for_pages(
            self.segmenter.as_ref(),
            pages.iter().map(|p| (p.page, p.text.as_str())),
        );

        tracing::debug!(
            path = %path.display(),
            pages = pages.len(),
            sentences = sentences.len(),
            segmenter = self.segmenter.name(),
            "Segmented document"
        );

        Ok(self.builder.build(&sentences))
    }
}
