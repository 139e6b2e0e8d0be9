//! UAX #29 sentence segmentation

use super::traits::SentenceSegmenter;
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations that end in a period but rarely end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "vs.", "etc.", "e.g.", "i.e.",
    "fig.", "vol.", "pp.", "cf.", "approx.", "inc.", "ltd.",
];

/// Segments text on Unicode sentence boundaries
///
/// Runs of whitespace (including the hard line breaks PDF extraction
/// leaves mid-sentence) are collapsed to single spaces first, since UAX #29
/// treats every line break as a paragraph end. A boundary directly after a
/// known abbreviation is not treated as a sentence end.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSentenceSegmenter;

impl UnicodeSentenceSegmenter {
    pub fn new() -> Self {
        Self
    }

    fn ends_with_abbreviation(sentence: &str) -> bool {
        sentence
            .split_whitespace()
            .next_back()
            .is_some_and(|last| ABBREVIATIONS.contains(&last.to_lowercase().as_str()))
    }
}

impl SentenceSegmenter for UnicodeSentenceSegmenter {
    fn name(&self) -> &'static str {
        "unicode"
    }

    fn segment(&self, text: &str) -> Vec<String> {
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");

        let mut sentences: Vec<String> = Vec::new();
        let mut pending = String::new();

        for piece in normalized.split_sentence_bounds() {
            let piece = piece.trim();
            if piece.is_empty() {
                continue;
            }
            if !pending.is_empty() {
                pending.push(' ');
            }
            pending.push_str(piece);

            if !Self::ends_with_abbreviation(&pending) {
                sentences.push(std::mem::take(&mut pending));
            }
        }

        if !pending.is_empty() {
            sentences.push(pending);
        }

        sentences
    }
}
