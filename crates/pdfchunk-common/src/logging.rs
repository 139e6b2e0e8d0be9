//! Logging setup shared by binaries and integration tests
//!
//! Logs always go to stderr (stdout is reserved for JSON output). When a log
//! directory is configured, events are written as JSON lines to both stderr
//! and a daily-rotated file.

use std::path::Path;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

const LOG_FILE_PREFIX: &str = "pdfchunk.log";

/// Errors raised while installing the global subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to prepare log directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Keeps the non-blocking writers flushing until dropped
///
/// Hold this for the lifetime of `main`.
#[must_use = "dropping the guards stops log output"]
pub struct LoggingGuards {
    _guards: Vec<WorkerGuard>,
}

/// Build the filter: `RUST_LOG` wins, otherwise the configured level
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global tracing subscriber
///
/// # Errors
/// Returns `LoggingError::Io` if the log directory cannot be created and
/// `LoggingError::Init` if a global subscriber is already installed.
pub fn init_logging(
    default_level: &str,
    log_dir: Option<&Path>,
) -> Result<LoggingGuards, LoggingError> {
    let (stderr_writer, stderr_guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = build_filter(default_level);

    let Some(dir) = log_dir else {
        tracing_subscriber::fmt()
            .with_writer(stderr_writer)
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| LoggingError::Init(e.to_string()))?;
        return Ok(LoggingGuards {
            _guards: vec![stderr_guard],
        });
    };

    std::fs::create_dir_all(dir)?;
    let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
    let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .json()
        .with_writer(file_writer.and(stderr_writer))
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(LoggingGuards {
        _guards: vec![file_guard, stderr_guard],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_plain_level() {
        let filter = build_filter("debug");
        assert!(!filter.to_string().is_empty());
    }

    #[test]
    fn test_second_init_reports_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let first = init_logging("info", Some(dir.path()));
        let second = init_logging("info", None);

        // Only one global subscriber can exist per process
        assert!(first.is_ok());
        assert!(matches!(second, Err(LoggingError::Init(_))));
    }
}
