//! Centralized configuration management for pdfchunk
//!
//! Configuration follows a simple hierarchy:
//! 1. Safe defaults (defined as constants)
//! 2. Optional TOML file
//! 3. `PDFCHUNK_*` environment variable overrides
//! 4. Runtime validation
//!
//! Command-line flags are applied by the binary after loading.

pub mod error;
pub mod source;
pub mod validation;

pub use error::{ConfigError, ConfigResult};

use std::str::FromStr;

// =============================================================================
// SAFE DEFAULTS
// =============================================================================

// Chunking
const DEFAULT_CHUNK_SIZE_TOKENS: usize = 300;
const DEFAULT_OVERLAP_RATIO: f64 = 0.1;
const DEFAULT_ENCODING: &str = "cl100k_base";

// Extraction
const DEFAULT_EXTENSIONS: &[&str] = &["pdf"];

// Batch
const DEFAULT_BATCH_PARALLEL: bool = false;
const DEFAULT_BATCH_WORKERS: usize = 4;
const MAX_BATCH_WORKERS: u64 = 256;

// Telemetry
const DEFAULT_TRACING_LEVEL: &str = "info";

/// Token encodings the parsing crate knows how to build
pub const SUPPORTED_ENCODINGS: &[&str] = &[
    "cl100k_base",
    "o200k_base",
    "p50k_base",
    "r50k_base",
    "whitespace",
];

const TRACING_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Core configuration for the whole pdfchunk pipeline
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Chunk packing parameters
    pub chunking: ChunkingConfig,

    /// Document discovery and extraction
    pub extraction: ExtractionConfig,

    /// Directory batch behaviour
    pub batch: BatchConfig,

    /// Logging
    pub telemetry: TelemetryConfig,
}

/// Chunk packing parameters
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Token budget per chunk; a lone oversized sentence may exceed it
    pub chunk_size_tokens: usize,

    /// Fraction of the budget re-used as leading context of the next chunk
    pub overlap_ratio: f64,

    /// Tokenizer encoding name, see [`SUPPORTED_ENCODINGS`]
    pub encoding: String,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size_tokens: DEFAULT_CHUNK_SIZE_TOKENS,
            overlap_ratio: DEFAULT_OVERLAP_RATIO,
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl validation::Validate for ChunkingConfig {
    fn validate(&self) -> ConfigResult<()> {
        validation::validate_range(
            self.chunk_size_tokens as u64,
            1,
            u64::MAX,
            "chunking.chunk_size_tokens",
        )?;
        validation::validate_ratio(self.overlap_ratio, "chunking.overlap_ratio")?;
        validation::validate_one_of(&self.encoding, SUPPORTED_ENCODINGS, "chunking.encoding")?;
        Ok(())
    }
}

/// Document discovery and extraction
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Directory scanned when the CLI is not given one
    pub docs_path: Option<String>,

    /// File extensions (without dot, case-insensitive) that are processed
    pub extensions: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            docs_path: None,
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect(),
        }
    }
}

impl validation::Validate for ExtractionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.extensions.is_empty() {
            return Err(ConfigError::MissingField {
                field: "extraction.extensions".to_string(),
            });
        }
        for ext in &self.extensions {
            validation::validate_non_empty(ext, "extraction.extensions")?;
        }
        if let Some(path) = &self.docs_path {
            validation::validate_non_empty(path, "extraction.docs_path")?;
        }
        Ok(())
    }
}

/// Directory batch behaviour
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Process files on a worker pool instead of one after another
    pub parallel: bool,

    /// Worker count when `parallel` is set
    pub workers: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: DEFAULT_BATCH_PARALLEL,
            workers: DEFAULT_BATCH_WORKERS,
        }
    }
}

impl validation::Validate for BatchConfig {
    fn validate(&self) -> ConfigResult<()> {
        validation::validate_range(self.workers as u64, 1, MAX_BATCH_WORKERS, "batch.workers")
    }
}

/// Logging configuration
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Default level when `RUST_LOG` is unset
    pub tracing_level: String,

    /// Optional directory for a daily-rotated log file
    pub log_dir: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            tracing_level: DEFAULT_TRACING_LEVEL.to_string(),
            log_dir: None,
        }
    }
}

impl validation::Validate for TelemetryConfig {
    fn validate(&self) -> ConfigResult<()> {
        validation::validate_one_of(
            &self.tracing_level.to_lowercase(),
            TRACING_LEVELS,
            "telemetry.tracing_level",
        )
        .map_err(|_| ConfigError::InvalidValue {
            field: "telemetry.tracing_level".to_string(),
            message: format!("Invalid tracing level: {}", self.tracing_level),
        })
    }
}

fn parse_override<T: FromStr>(raw: Option<String>, current: T, key: &str) -> ConfigResult<T> {
    let Some(value) = raw else {
        return Ok(current);
    };
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        field: key.to_string(),
        message: format!("cannot parse '{value}'"),
    })
}

fn parse_bool_override(raw: Option<String>, current: bool, key: &str) -> ConfigResult<bool> {
    match raw.as_deref().map(str::trim) {
        None => Ok(current),
        Some("1" | "true" | "TRUE" | "yes") => Ok(true),
        Some("0" | "false" | "FALSE" | "no") => Ok(false),
        Some(other) => Err(ConfigError::InvalidValue {
            field: key.to_string(),
            message: format!("expected a boolean, got '{other}'"),
        }),
    }
}

impl ApplicationConfig {
    /// Apply `PDFCHUNK_*` variables from the process environment
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` if a variable cannot be parsed
    pub fn with_env_overrides(self) -> ConfigResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the variable whose value
    /// cannot be parsed. Range checks are left to [`validation::Validate`].
    pub fn with_overrides<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.chunking.chunk_size_tokens = parse_override(
            lookup("PDFCHUNK_CHUNK_SIZE_TOKENS"),
            self.chunking.chunk_size_tokens,
            "PDFCHUNK_CHUNK_SIZE_TOKENS",
        )?;
        self.chunking.overlap_ratio = parse_override(
            lookup("PDFCHUNK_OVERLAP_RATIO"),
            self.chunking.overlap_ratio,
            "PDFCHUNK_OVERLAP_RATIO",
        )?;
        if let Some(encoding) = lookup("PDFCHUNK_ENCODING") {
            self.chunking.encoding = encoding.trim().to_string();
        }

        // DOCS_PATH is the historical name and is still honoured
        if let Some(path) = lookup("PDFCHUNK_DOCS_PATH").or_else(|| lookup("DOCS_PATH")) {
            self.extraction.docs_path = Some(path);
        }
        if let Some(list) = lookup("PDFCHUNK_EXTENSIONS") {
            self.extraction.extensions = list
                .split(',')
                .map(|ext| ext.trim().trim_start_matches('.').to_string())
                .filter(|ext| !ext.is_empty())
                .collect();
        }

        self.batch.parallel = parse_bool_override(
            lookup("PDFCHUNK_BATCH_PARALLEL"),
            self.batch.parallel,
            "PDFCHUNK_BATCH_PARALLEL",
        )?;
        self.batch.workers = parse_override(
            lookup("PDFCHUNK_BATCH_WORKERS"),
            self.batch.workers,
            "PDFCHUNK_BATCH_WORKERS",
        )?;

        if let Some(level) = lookup("PDFCHUNK_TRACING_LEVEL") {
            self.telemetry.tracing_level = level.trim().to_string();
        }
        if let Some(dir) = lookup("PDFCHUNK_LOG_DIR") {
            self.telemetry.log_dir = Some(dir);
        }

        Ok(self)
    }

    /// Render the configuration as TOML (used by `pdfchunk config`)
    ///
    /// # Errors
    /// Returns `ConfigError::TomlSerialization` if serialization fails
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl validation::Validate for ApplicationConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.chunking.validate()?;
        self.extraction.validate()?;
        self.batch.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_uses_safe_defaults() {
        let config = ApplicationConfig::default();

        assert_eq!(config.chunking.chunk_size_tokens, DEFAULT_CHUNK_SIZE_TOKENS);
        assert!((config.chunking.overlap_ratio - DEFAULT_OVERLAP_RATIO).abs() < f64::EPSILON);
        assert_eq!(config.chunking.encoding, "cl100k_base");
        assert_eq!(config.extraction.extensions, vec!["pdf".to_string()]);
        assert!(!config.batch.parallel);
        assert_eq!(config.telemetry.tracing_level, DEFAULT_TRACING_LEVEL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let config = ApplicationConfig::default()
            .with_overrides(lookup_from(&[
                ("PDFCHUNK_CHUNK_SIZE_TOKENS", "120"),
                ("PDFCHUNK_OVERLAP_RATIO", "0.2"),
                ("PDFCHUNK_EXTENSIONS", "pdf, .PDF"),
                ("PDFCHUNK_BATCH_PARALLEL", "true"),
                ("PDFCHUNK_BATCH_WORKERS", "8"),
            ]))
            .expect("overrides parse");

        assert_eq!(config.chunking.chunk_size_tokens, 120);
        assert!((config.chunking.overlap_ratio - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.extraction.extensions, vec!["pdf", "PDF"]);
        assert!(config.batch.parallel);
        assert_eq!(config.batch.workers, 8);
    }

    #[test]
    fn test_docs_path_falls_back_to_legacy_name() {
        let config = ApplicationConfig::default()
            .with_overrides(lookup_from(&[("DOCS_PATH", "/srv/manuals")]))
            .expect("overrides parse");
        assert_eq!(config.extraction.docs_path.as_deref(), Some("/srv/manuals"));

        let config = ApplicationConfig::default()
            .with_overrides(lookup_from(&[
                ("DOCS_PATH", "/srv/manuals"),
                ("PDFCHUNK_DOCS_PATH", "/srv/pdfs"),
            ]))
            .expect("overrides parse");
        assert_eq!(config.extraction.docs_path.as_deref(), Some("/srv/pdfs"));
    }

    #[test]
    fn test_negative_chunk_size_override_is_rejected() {
        let result = ApplicationConfig::default()
            .with_overrides(lookup_from(&[("PDFCHUNK_CHUNK_SIZE_TOKENS", "-5")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "PDFCHUNK_CHUNK_SIZE_TOKENS"
        ));
    }

    #[test]
    fn test_unparseable_ratio_override_is_rejected() {
        let result = ApplicationConfig::default()
            .with_overrides(lookup_from(&[("PDFCHUNK_OVERLAP_RATIO", "abc")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "PDFCHUNK_OVERLAP_RATIO"
        ));
    }

    #[test]
    fn test_unparseable_bool_override_is_rejected() {
        let result = ApplicationConfig::default()
            .with_overrides(lookup_from(&[("PDFCHUNK_BATCH_PARALLEL", "sometimes")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_out_of_range_override_fails_validation() {
        let config = ApplicationConfig::default()
            .with_overrides(lookup_from(&[("PDFCHUNK_OVERLAP_RATIO", "1.5")]))
            .expect("overrides parse");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_chunk_size() {
        let mut config = ApplicationConfig::default();
        config.chunking.chunk_size_tokens = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { value: 0, .. })
        ));
    }

    #[test]
    fn test_validation_rejects_ratio_of_one() {
        let mut config = ApplicationConfig::default();
        config.chunking.overlap_ratio = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_encoding() {
        let mut config = ApplicationConfig::default();
        config.chunking.encoding = "gpt2".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_telemetry_config_validation() {
        let mut config = ApplicationConfig::default();
        config.telemetry.tracing_level = "invalid-level".to_string();

        let validation_result = config.validate();
        assert!(validation_result.is_err());

        if let Err(error) = validation_result {
            assert!(error.to_string().contains("Invalid tracing level"));
        }
    }

    #[test]
    fn test_configuration_serialization_roundtrip() {
        let original = ApplicationConfig::default();
        let toml_string = original.to_toml_string().expect("serialize");
        assert!(toml_string.contains("[chunking]"));

        let parsed: ApplicationConfig = toml::from_str(&toml_string).expect("parse");
        assert_eq!(
            parsed.chunking.chunk_size_tokens,
            original.chunking.chunk_size_tokens
        );
        assert!(parsed.validate().is_ok());
    }
}
