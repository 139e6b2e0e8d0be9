//! Main entry point for the pdfchunk command-line tool

// Internal modules
mod cli;
mod commands;
mod config;

// Internal imports (std, crate)
use crate::cli::Args;
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::{Context, Result};
use clap::Parser;
use pdfchunk_common::{init_logging, initialize_environment};

fn main() -> Result<()> {
    // Load .env before anything reads PDFCHUNK_* variables
    initialize_environment();

    let args = Args::parse();
    let config = config::load_config(args.config_file.as_deref())?;

    // Command-line log directory overrides configuration
    let log_dir = args
        .log_dir
        .clone()
        .or_else(|| config.telemetry.log_dir.as_ref().map(PathBuf::from));
    let _guards = init_logging(&config.telemetry.tracing_level, log_dir.as_deref())
        .context("Failed to initialize logging")?;

    tracing::debug!(command = ?args.command, "Starting pdfchunk");
    commands::run(&args.command, config)
}
