//! Command-line interface definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pdfchunk: split PDF documents into overlapping, token-bounded chunks
///
/// Results are written to stdout as JSON unless `--output` is given. Logs go
/// to stderr.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path (TOML format)
    #[arg(long = "config", short = 'c', global = true)]
    pub config_file: Option<PathBuf>,

    /// Also write logs to a daily-rotated file in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Chunk every document in a directory
    Chunk(BatchArgs),
    /// Chunk a directory and emit `(id, text, metadata)` index records
    Records(BatchArgs),
    /// Chunk a directory and list document titles with their last page
    Titles(BatchArgs),
    /// Print the effective configuration as TOML
    Config,
}

/// Options shared by every command that runs a batch
#[derive(clap::Args, Debug, Default, Clone)]
pub struct BatchArgs {
    /// Directory containing the documents (defaults to `extraction.docs_path`)
    pub dir: Option<PathBuf>,

    /// Token budget per chunk
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Fraction of the budget repeated between consecutive chunks, in [0, 1)
    #[arg(long)]
    pub overlap_ratio: Option<f64>,

    /// Tokenizer encoding (cl100k_base, o200k_base, p50k_base, r50k_base, whitespace)
    #[arg(long)]
    pub encoding: Option<String>,

    /// Process files on a worker pool
    #[arg(long)]
    pub parallel: bool,

    /// Worker count for `--parallel`
    #[arg(long)]
    pub workers: Option<usize>,

    /// Write JSON here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl Command {
    pub fn batch_args(&self) -> Option<&BatchArgs> {
        match self {
            Self::Chunk(args) | Self::Records(args) | Self::Titles(args) => Some(args),
            Self::Config => None,
        }
    }
}
