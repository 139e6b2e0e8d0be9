//! Records handed to the downstream embedding store
//!
//! Each chunk becomes an `(id, text, metadata)` triple. The catalog answers
//! the two metadata-only questions the store is asked: which titles exist
//! (with their last page) and which records belong to a set of titles.

use crate::indexing::BatchReport;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Metadata stored next to each chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMetadata {
    pub title: String,
    pub source: String,
    /// Comma-joined page list, e.g. `"4,5"`
    pub pages: String,
}

/// One chunk ready for indexing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    /// `<file stem>_<chunk position>`
    pub id: String,
    pub text: String,
    pub metadata: RecordMetadata,
}

/// Flatten a batch report into index records
///
/// Documents are visited in filename order and chunks in emission order.
pub fn index_records(report: &BatchReport) -> Vec<IndexRecord> {
    report
        .documents
        .iter()
        .flat_map(|(filename, chunks)| {
            let stem = Path::new(filename)
                .file_stem()
                .map_or_else(|| filename.clone(), |s| s.to_string_lossy().into_owned());

            chunks.iter().enumerate().map(move |(position, chunk)| IndexRecord {
                id: format!("{stem}_{position}"),
                text: chunk.text.clone(),
                metadata: RecordMetadata {
                    title: filename.clone(),
                    source: filename.clone(),
                    pages: chunk
                        .pages
                        .iter()
                        .map(u32::to_string)
                        .collect::<Vec<_>>()
                        .join(","),
                },
            })
        })
        .collect()
}

/// A title and the highest page any of its chunks cites
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleSummary {
    pub title: String,
    pub pages: u32,
}

/// Titles known to the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentCatalog {
    titles: BTreeMap<String, u32>,
}

impl DocumentCatalog {
    /// Collect distinct titles with their maximum page
    ///
    /// Page fields that are not plain numbers are ignored; a title whose
    /// records cite no pages reports 0.
    pub fn from_records(records: &[IndexRecord]) -> Self {
        let mut titles = BTreeMap::new();
        for record in records {
            let page = max_page(&record.metadata.pages);
            let entry = titles.entry(record.metadata.title.clone()).or_insert(0);
            *entry = (*entry).max(page);
        }
        Self { titles }
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Titles sorted alphabetically
    pub fn summaries(&self) -> Vec<TitleSummary> {
        self.titles
            .iter()
            .map(|(title, &pages)| TitleSummary {
                title: title.clone(),
                pages,
            })
            .collect()
    }

    /// Records whose title is in `titles`, in their original order
    pub fn filter_titles<'a, S: AsRef<str>>(
        records: &'a [IndexRecord],
        titles: &[S],
    ) -> Vec<&'a IndexRecord> {
        let allowed: HashSet<&str> = titles.iter().map(AsRef::as_ref).collect();
        records
            .iter()
            .filter(|record| allowed.contains(record.metadata.title.as_str()))
            .collect()
    }
}

fn max_page(pages: &str) -> u32 {
    pages
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|part| part.parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}
