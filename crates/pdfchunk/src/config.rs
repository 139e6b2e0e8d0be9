//! Configuration assembly for the binary
//!
//! Precedence, lowest first: defaults, TOML file, `PDFCHUNK_*` environment,
//! command-line flags.

use crate::cli::BatchArgs;
use anyhow::{Context, Result, bail};
use pdfchunk_config::source::{ConfigurationLoader, EnvironmentSource, TomlFileSource};
use pdfchunk_config::validation::Validate;
use pdfchunk_config::ApplicationConfig;
use std::path::{Path, PathBuf};

/// `<config dir>/pdfchunk/config.toml`, e.g. `~/.config/pdfchunk/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pdfchunk").join("config.toml"))
}

/// Load configuration from file and environment
///
/// An explicit `config_file` must exist. The default location is optional.
pub fn load_config(config_file: Option<&Path>) -> Result<ApplicationConfig> {
    let mut loader = ConfigurationLoader::new().add_source(Box::new(EnvironmentSource));

    if let Some(path) = config_file {
        loader = loader.add_source(Box::new(TomlFileSource::new(path)));
    } else if let Some(path) = default_config_path() {
        loader = loader.add_source(Box::new(TomlFileSource::optional(path)));
    }

    loader.load().context("Failed to load configuration")
}

/// Apply command-line overrides and re-validate
pub fn apply_batch_args(mut config: ApplicationConfig, args: &BatchArgs) -> Result<ApplicationConfig> {
    if let Some(size) = args.chunk_size {
        config.chunking.chunk_size_tokens = size;
    }
    if let Some(ratio) = args.overlap_ratio {
        config.chunking.overlap_ratio = ratio;
    }
    if let Some(encoding) = &args.encoding {
        config.chunking.encoding.clone_from(encoding);
    }
    if args.parallel {
        config.batch.parallel = true;
    }
    if let Some(workers) = args.workers {
        config.batch.workers = workers;
    }
    if let Some(dir) = &args.dir {
        config.extraction.docs_path = Some(dir.display().to_string());
    }

    config.validate().context("Invalid command-line option")?;
    Ok(config)
}

/// The directory to process: `extraction.docs_path` after overrides
pub fn docs_dir(config: &ApplicationConfig) -> Result<PathBuf> {
    match &config.extraction.docs_path {
        Some(path) => Ok(PathBuf::from(path)),
        None => bail!(
            "No document directory given. Pass DIR, set PDFCHUNK_DOCS_PATH, or set extraction.docs_path"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[chunking]\nchunk_size_tokens = 120\n\n[batch]\nworkers = 8")
            .expect("write");

        let config = load_config(Some(file.path())).expect("load");
        let args = BatchArgs {
            chunk_size: Some(64),
            dir: Some(PathBuf::from("/srv/docs")),
            ..BatchArgs::default()
        };
        let config = apply_batch_args(config, &args).expect("apply");

        assert_eq!(config.chunking.chunk_size_tokens, 64);
        assert_eq!(config.batch.workers, 8);
        assert_eq!(docs_dir(&config).expect("dir"), PathBuf::from("/srv/docs"));
    }

    #[test]
    fn test_invalid_flag_rejected() {
        let args = BatchArgs {
            overlap_ratio: Some(1.5),
            ..BatchArgs::default()
        };
        assert!(apply_batch_args(ApplicationConfig::default(), &args).is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        assert!(load_config(Some(Path::new("/nonexistent/pdfchunk.toml"))).is_err());
    }

    #[test]
    fn test_docs_dir_required() {
        let mut config = ApplicationConfig::default();
        config.extraction.docs_path = None;
        assert!(docs_dir(&config).is_err());
    }
}
