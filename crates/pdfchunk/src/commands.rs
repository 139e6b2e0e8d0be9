//! Command execution

use crate::cli::Command;
use crate::config::{apply_batch_args, docs_dir};
use anyhow::{Context, Result};
use pdfchunk_config::ApplicationConfig;
use pdfchunk_indexing::{BatchReport, DirectoryBatchDriver, DocumentCatalog, index_records};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Run a parsed command against the loaded configuration
pub fn run(command: &Command, config: ApplicationConfig) -> Result<()> {
    let Some(batch_args) = command.batch_args() else {
        let toml = config.to_toml_string()?;
        print!("{toml}");
        return Ok(());
    };

    let config = apply_batch_args(config, batch_args)?;
    let report = run_batch(&config)?;
    let output = batch_args.output.as_deref();

    match command {
        Command::Chunk(_) => write_json(&report, output),
        Command::Records(_) => write_json(&index_records(&report), output),
        Command::Titles(_) => {
            let catalog = DocumentCatalog::from_records(&index_records(&report));
            write_json(&catalog.summaries(), output)
        }
        Command::Config => Ok(()),
    }
}

fn run_batch(config: &ApplicationConfig) -> Result<BatchReport> {
    let dir = docs_dir(config)?;
    let driver = DirectoryBatchDriver::from_config(config)?;
    let report = driver
        .run(&dir)
        .with_context(|| format!("Failed to process '{}'", dir.display()))?;

    for (file, reason) in &report.failures {
        tracing::warn!(file = %file, "Skipped: {reason}");
    }
    Ok(report)
}

fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;

    match output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}
