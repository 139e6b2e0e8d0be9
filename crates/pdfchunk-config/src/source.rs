//! Configuration source loading and composition

use crate::validation::Validate;
use crate::{ApplicationConfig, ConfigResult};
use std::path::{Path, PathBuf};

/// A layer that can modify the configuration built so far
pub trait ConfigurationSource {
    /// Apply this source on top of `base`
    ///
    /// # Errors
    /// Returns configuration loading errors
    fn apply(&self, base: ApplicationConfig) -> ConfigResult<ApplicationConfig>;

    /// Human-readable name for logging
    fn name(&self) -> &str;

    /// Higher priority sources are applied later and win
    fn priority(&self) -> u8;
}

/// `PDFCHUNK_*` environment variable overrides
pub struct EnvironmentSource;

impl ConfigurationSource for EnvironmentSource {
    fn apply(&self, base: ApplicationConfig) -> ConfigResult<ApplicationConfig> {
        base.with_env_overrides()
    }

    fn name(&self) -> &'static str {
        "environment"
    }

    fn priority(&self) -> u8 {
        100
    }
}

/// TOML configuration file
///
/// Missing keys fall back to defaults. A missing file is an error unless the
/// source was built with [`TomlFileSource::optional`].
pub struct TomlFileSource {
    path: PathBuf,
    required: bool,
}

impl TomlFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required: true,
        }
    }

    pub fn optional<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required: false,
        }
    }
}

impl ConfigurationSource for TomlFileSource {
    fn apply(&self, base: ApplicationConfig) -> ConfigResult<ApplicationConfig> {
        if !self.required && !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "Optional config file not found");
            return Ok(base);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let config: ApplicationConfig = toml::from_str(&content)?;
        Ok(config)
    }

    fn name(&self) -> &'static str {
        "toml_file"
    }

    fn priority(&self) -> u8 {
        50
    }
}

type ConfigSources = Vec<Box<dyn ConfigurationSource>>;

/// Configuration loader that layers multiple sources over the defaults
pub struct ConfigurationLoader {
    sources: ConfigSources,
}

impl ConfigurationLoader {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    #[must_use]
    pub fn add_source(mut self, source: Box<dyn ConfigurationSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Apply all sources in priority order, then validate the result
    ///
    /// # Errors
    /// Returns the first source error, or a validation error
    pub fn load(&self) -> ConfigResult<ApplicationConfig> {
        let mut sorted_sources = self.sources.iter().collect::<Vec<_>>();
        sorted_sources.sort_by_key(|source| source.priority());

        let mut config = ApplicationConfig::default();
        for source in sorted_sources {
            config = source.apply(config)?;
            tracing::debug!("Applied configuration source: {}", source.name());
        }

        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigurationLoader {
    fn default() -> Self {
        Self::new()
    }
}
