//! Page text extraction

pub mod pdf;
pub mod traits;

pub use pdf::PdfTextExtractor;
pub use traits::{PageText, PageTextExtractor, PageTextExtractorRef};
