//! PDF extraction via `pdf-extract`

use super::traits::{PageText, PageTextExtractor};
use crate::{IndexerError, IndexerResult};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// Extracts per-page text from PDF files
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract pages from PDF bytes already in memory
    ///
    /// # Errors
    /// Returns `IndexerError::Extraction` if the PDF cannot be decoded. Panics
    /// raised while decoding malformed files are reported the same way.
    pub fn extract_from_mem(&self, file: &str, bytes: &[u8]) -> IndexerResult<Vec<PageText>> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(bytes)
        }));

        let pages = match outcome {
            Ok(Ok(pages)) => pages,
            Ok(Err(e)) => return Err(IndexerError::extraction(file, e.to_string())),
            Err(payload) => {
                return Err(IndexerError::extraction(
                    file,
                    format!("PDF decoder panicked: {}", panic_message(payload.as_ref())),
                ));
            }
        };

        Ok(number_pages(pages))
    }
}

impl PageTextExtractor for PdfTextExtractor {
    fn extract(&self, path: &Path) -> IndexerResult<Vec<PageText>> {
        let file = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        let bytes = std::fs::read(path).map_err(|e| {
            IndexerError::io_with_source(format!("failed to read '{}'", path.display()), e)
        })?;

        let pages = self.extract_from_mem(&file, &bytes)?;
        tracing::debug!(file = %file, pages = pages.len(), "Extracted PDF text");
        Ok(pages)
    }
}

/// Number page texts from 1 in document order
///
/// Blank pages stay in the list as empty text so later pages keep their
/// real numbers.
pub fn number_pages(pages: Vec<String>) -> Vec<PageText> {
    pages
        .into_iter()
        .zip(1u32..)
        .map(|(text, page)| PageText::new(page, text.trim()))
        .collect()
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
