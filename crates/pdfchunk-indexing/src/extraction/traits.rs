//! Extraction contract

use crate::IndexerResult;
use std::path::Path;
use std::sync::Arc;

/// Raw text of one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// 1-based page index
    pub page: u32,
    pub text: String,
}

impl PageText {
    pub fn new(page: u32, text: impl Into<String>) -> Self {
        Self {
            page,
            text: text.into(),
        }
    }
}

/// Reads a document and returns its pages in document order
///
/// A page without extractable text is returned with an empty string rather
/// than skipped, so page numbers stay aligned with the source document.
pub trait PageTextExtractor: Send + Sync {
    /// Extract every page of the document at `path`
    ///
    /// # Errors
    /// Returns `IndexerError::Extraction` or `IndexerError::Io` when the
    /// document cannot be read
    fn extract(&self, path: &Path) -> IndexerResult<Vec<PageText>>;
}

/// Type alias for shared extractor
pub type PageTextExtractorRef = Arc<dyn PageTextExtractor>;
