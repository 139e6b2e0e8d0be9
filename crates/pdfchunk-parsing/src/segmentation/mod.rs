//! Sentence segmentation

pub mod traits;
pub mod unicode;

pub use traits::{SentenceSegmenter, SentenceSegmenterRef};
pub use unicode::UnicodeSentenceSegmenter;

use crate::chunking::Sentence;

/// Flatten `(page, text)` pairs into one ordered sentence stream
///
/// Pages are visited in the order given; sentence order within a page is
/// preserved.
pub fn sentences_for_pages<'a, I>(segmenter: &dyn SentenceSegmenter, pages: I) -> Vec<Sentence>
where
    I: IntoIterator<Item = (u32, &'a str)>,
{
    pages
        .into_iter()
        .flat_map(|(page, text)| {
            segmenter
                .segment(text)
                .into_iter()
                .map(move |sentence| Sentence::new(sentence, page))
        })
        .collect()
}
