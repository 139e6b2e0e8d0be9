//! Shared test utilities for pdfchunk integration tests
//!
//! Deterministic stand-ins for the tokenizer, segmenter and extractor so
//! chunking and batch behaviour can be checked without real PDFs or BPE
//! vocabularies.
//!
//! ## Usage
//!
//! In your test crate's `Cargo.toml`:
//! ```toml
//! [dev-dependencies]
//! pdfchunk-test-utils = { path = "../pdfchunk-test-utils" }
//! ```

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use pdfchunk_indexing::{IndexerError, IndexerResult, PageText, PageTextExtractor};
use pdfchunk_parsing::{Sentence, SentenceSegmenter, TokenCounter};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One token per whitespace-separated word, with a call counter
#[derive(Debug, Default)]
pub struct FakeTokenCounter {
    calls: AtomicUsize,
}

impl FakeTokenCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of texts counted so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TokenCounter for FakeTokenCounter {
    fn name(&self) -> &'static str {
        "fake-words"
    }

    fn count(&self, text: &str) -> usize {
        self.calls.fetch_add(1, Ordering::SeqCst);
        text.split_whitespace().count()
    }
}

/// Every non-blank line is one sentence
#[derive(Debug, Default, Clone, Copy)]
pub struct LineSegmenter;

impl SentenceSegmenter for LineSegmenter {
    fn name(&self) -> &'static str {
        "lines"
    }

    fn segment(&self, text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Serves canned pages keyed by file name
///
/// Files that were never registered fail like an unreadable document.
#[derive(Debug, Default, Clone)]
pub struct InMemoryExtractor {
    documents: HashMap<String, Result<Vec<String>, String>>,
}

impl InMemoryExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document; page `n` of the result is `pages[n - 1]`
    #[must_use]
    pub fn with_document(mut self, filename: &str, pages: &[&str]) -> Self {
        self.documents.insert(
            filename.to_string(),
            Ok(pages.iter().map(|p| (*p).to_string()).collect()),
        );
        self
    }

    /// Register a document whose extraction fails with `message`
    #[must_use]
    pub fn with_failure(mut self, filename: &str, message: &str) -> Self {
        self.documents
            .insert(filename.to_string(), Err(message.to_string()));
        self
    }
}

impl PageTextExtractor for InMemoryExtractor {
    fn extract(&self, path: &Path) -> IndexerResult<Vec<PageText>> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match self.documents.get(&filename) {
            Some(Ok(pages)) => Ok(pages
                .iter()
                .zip(1u32..)
                .map(|(text, page)| PageText::new(page, text.clone()))
                .collect()),
            Some(Err(message)) => Err(IndexerError::extraction(filename, message.clone())),
            None => Err(IndexerError::extraction(filename, "no such document")),
        }
    }
}

/// `n` distinct words, tagged so sentences never collide
pub fn words(n: usize, tag: usize) -> String {
    (0..n)
        .map(|i| format!("s{tag}w{i}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sentences with the given word counts, all on `page`
pub fn sized_sentences(sizes: &[usize], page: u32) -> Vec<Sentence> {
    sizes
        .iter()
        .enumerate()
        .map(|(i, &n)| Sentence::new(words(n, i), page))
        .collect()
}

/// A temp directory holding empty files with the given names
///
/// # Panics
/// Panics if the directory or a file cannot be created
#[allow(clippy::expect_used)] // Test infrastructure - panic on setup failure is acceptable
pub fn fixture_dir(filenames: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for name in filenames {
        std::fs::write(dir.path().join(name), b"").expect("Failed to create fixture file");
    }
    dir
}

/// Write a real PDF with one page per entry of `pages`
///
/// Each page draws its text as a single Helvetica line. A blank entry
/// produces a page with no text operators.
///
/// # Panics
/// Panics if the content stream cannot be encoded or the file cannot be saved
#[allow(clippy::expect_used)] // Test infrastructure - panic on setup failure is acceptable
pub fn write_pdf(path: &Path, pages: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for text in pages {
        let operations = if text.trim().is_empty() {
            Vec::new()
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations }
            .encode()
            .expect("Failed to encode page content");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = i64::try_from(kids.len()).expect("page count fits in i64");
    let media_box: Vec<Object> = vec![0.into(), 0.into(), 612.into(), 792.into()];
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => media_box,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path).expect("Failed to save PDF fixture");
}
