//! Directory batch driver

use super::pipeline::DocumentPipeline;
use crate::{IndexerError, IndexerResult};
use pdfchunk_config::ApplicationConfig;
use pdfchunk_parsing::Chunk;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One chunk in the persisted `{ pages, text }` shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub pages: Vec<u32>,
    pub text: String,
}

impl From<Chunk> for ChunkRecord {
    fn from(chunk: Chunk) -> Self {
        Self {
            pages: chunk.pages,
            text: chunk.text,
        }
    }
}

/// Outcome of one directory run
///
/// Every processed file has exactly one entry, either in `documents` (possibly
/// with an empty chunk list) or in `failures`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub documents: BTreeMap<String, Vec<ChunkRecord>>,
    pub failures: BTreeMap<String, String>,
}

impl BatchReport {
    pub fn chunk_count(&self) -> usize {
        self.documents.values().map(Vec::len).sum()
    }

    fn record(&mut self, filename: String, outcome: IndexerResult<Vec<Chunk>>) {
        match outcome {
            Ok(chunks) => {
                tracing::debug!(file = %filename, chunks = chunks.len(), "Document chunked");
                self.documents
                    .insert(filename, chunks.into_iter().map(ChunkRecord::from).collect());
            }
            Err(e) => {
                tracing::warn!(file = %filename, error = %e, "Failed to process document");
                self.failures.insert(filename, e.to_string());
            }
        }
    }
}

/// How files are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchMode {
    #[default]
    Sequential,
    /// Process files on a dedicated rayon pool
    Parallel { workers: usize },
}

/// Chunks every matching document directly inside a directory
pub struct DirectoryBatchDriver {
    pipeline: DocumentPipeline,
    extensions: Vec<String>,
    mode: BatchMode,
}

impl DirectoryBatchDriver {
    pub fn new(pipeline: DocumentPipeline) -> Self {
        Self {
            pipeline,
            extensions: vec!["pdf".to_string()],
            mode: BatchMode::Sequential,
        }
    }

    /// Build the PDF pipeline, extension filter and scheduling from configuration
    ///
    /// # Errors
    /// Returns `IndexerError::Parsing` for invalid chunking settings
    pub fn from_config(config: &ApplicationConfig) -> IndexerResult<Self> {
        let mode = if config.batch.parallel {
            BatchMode::Parallel {
                workers: config.batch.workers,
            }
        } else {
            BatchMode::Sequential
        };

        Ok(Self::new(DocumentPipeline::from_config(config)?)
            .with_extensions(config.extraction.extensions.clone())
            .with_mode(mode))
    }

    /// Accepted extensions, compared case-insensitively and without the dot
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: BatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn pipeline(&self) -> &DocumentPipeline {
        &self.pipeline
    }

    /// Matching regular files in `dir`, sorted by path
    ///
    /// Entries that cannot be read are logged and skipped.
    ///
    /// # Errors
    /// Returns `IndexerError::Io` if the directory cannot be listed
    pub fn collect_documents(&self, dir: &Path) -> IndexerResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(dir).map_err(|e| {
            IndexerError::io_with_source(format!("cannot read directory '{}'", dir.display()), e)
        })?;

        let mut files: Vec<PathBuf> = readable_paths(entries.map(|entry| entry.map(|e| e.path())))
            .into_iter()
            .filter(|path| path.is_file() && self.matches_extension(path))
            .collect();
        files.sort();
        Ok(files)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.contains(&ext.to_lowercase()))
    }

    /// Chunk every matching file in `dir`
    ///
    /// A failing file is recorded in [`BatchReport::failures`] and does not
    /// stop the run.
    ///
    /// # Errors
    /// Returns `IndexerError::Io` if the directory cannot be listed, or
    /// `IndexerError::Other` if the worker pool cannot be created
    pub fn run(&self, dir: &Path) -> IndexerResult<BatchReport> {
        let files = self.collect_documents(dir)?;
        tracing::info!(
            dir = %dir.display(),
            files = files.len(),
            mode = ?self.mode,
            "Starting batch"
        );

        let outcomes: Vec<(String, IndexerResult<Vec<Chunk>>)> = match self.mode {
            BatchMode::Sequential => files.iter().map(|path| self.process_file(path)).collect(),
            BatchMode::Parallel { workers } => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .thread_name(|i| format!("pdfchunk-worker-{i}"))
                    .build()
                    .map_err(|e| IndexerError::Other(format!("failed to build worker pool: {e}")))?;
                pool.install(|| {
                    files
                        .par_iter()
                        .map(|path| self.process_file(path))
                        .collect::<Vec<_>>()
                })
            }
        };

        let mut report = BatchReport::default();
        for (filename, outcome) in outcomes {
            report.record(filename, outcome);
        }

        tracing::info!(
            documents = report.documents.len(),
            failures = report.failures.len(),
            chunks = report.chunk_count(),
            "Batch complete"
        );
        Ok(report)
    }

    fn process_file(&self, path: &Path) -> (String, IndexerResult<Vec<Chunk>>) {
        let filename = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        tracing::info!("Processing: {filename}");
        let outcome = self.pipeline.process(path);
        (filename, outcome)
    }
}

/// Paths of the entries that could be read; the rest are logged and skipped
fn readable_paths<I>(entries: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = std::io::Result<PathBuf>>,
{
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable directory entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_entries_are_skipped() {
        let entries = vec![
            Ok(PathBuf::from("/docs/a.pdf")),
            Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "entry vanished",
            )),
            Ok(PathBuf::from("/docs/b.pdf")),
        ];

        assert_eq!(
            readable_paths(entries),
            vec![PathBuf::from("/docs/a.pdf"), PathBuf::from("/docs/b.pdf")]
        );
    }

    #[test]
    fn test_chunk_record_serializes_pages_then_text() {
        let record = ChunkRecord {
            pages: vec![1, 2],
            text: "Hello there.".to_string(),
        };
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, r#"{"pages":[1,2],"text":"Hello there."}"#);
    }

    #[test]
    fn test_report_chunk_count() {
        let mut report = BatchReport::default();
        report.documents.insert(
            "a.pdf".to_string(),
            vec![
                ChunkRecord {
                    pages: vec![1],
                    text: "x".to_string(),
                };
                3
            ],
        );
        report.documents.insert("b.pdf".to_string(), Vec::new());
        assert_eq!(report.chunk_count(), 3);
    }
}
