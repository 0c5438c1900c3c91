//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values using Figment.

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_NESTING, CONFIG_ENV_PREFIX, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};
use tagcheck_domain::error::{Error, Result};
use tagcheck_domain::value_objects::{ExternalsConfig, HarnessConfig};

/// Configuration loader service
#[derive(Clone, Default)]
pub struct ConfigLoader {
    /// Explicit configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables with prefix (e.g., `TAGCHECK_HARNESS__RULES_DIR`)
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path
            && !config_path.exists()
        {
            return Err(Error::configuration(format!(
                "Configuration file not found: {}",
                config_path.display()
            )));
        }
        if let Some(source_path) = self.source_path() {
            figment = figment.merge(Toml::file(source_path));
        }

        figment = figment
            .merge(Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split(CONFIG_ENV_NESTING));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// TOML file that [`load`](Self::load) reads: the explicit path, or the
    /// first default location that exists
    pub fn source_path(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(Self::find_default_config_path)
    }

    /// First existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

/// Validate application configuration
fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_harness_config(&config.harness)?;
    validate_externals_config(&config.externals)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_harness_config(config: &HarnessConfig) -> Result<()> {
    if config.rule_pattern.trim().is_empty() {
        return Err(Error::configuration("Rule pattern cannot be empty"));
    }
    if config.tests_dir.trim().is_empty() {
        return Err(Error::configuration("Tests directory name cannot be empty"));
    }
    if config.fixture_extension.trim().is_empty() {
        return Err(Error::configuration("Fixture extension cannot be empty"));
    }
    Ok(())
}

fn validate_externals_config(config: &ExternalsConfig) -> Result<()> {
    if config.prefix.is_empty() {
        return Err(Error::configuration("External variable prefix cannot be empty"));
    }
    if let Some(field) = config.extra_fields.iter().find(|f| f.trim().is_empty()) {
        return Err(Error::configuration(format!(
            "External field names cannot be blank: {field:?}"
        )));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Set harness configuration
    pub fn with_harness(mut self, harness: HarnessConfig) -> Self {
        self.config.harness = harness;
        self
    }

    /// Enable or disable coloured output
    pub fn with_color(mut self, color: bool) -> Self {
        self.config.output.color = color;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
