//! Application configuration.
//!
//! A single Config record passed explicitly into the pipeline, loaded from
//! YAML files and environment variables.

mod analysis;

pub use analysis::{AnalysisConfig, DataConfig, DeliveryConfig};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "shopmetrics.yaml";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "SHOPMETRICS_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "SHOPMETRICS";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "SHOPMETRICS_LOG";

use serde::Deserialize;

use crate::filters::{validate_month, FilterError};

/// Errors from loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid analysis settings: {0}")]
    Analysis(#[from] FilterError),

    #[error("analysis.top_categories must be at least 1")]
    ZeroTopCategories,
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset location.
    pub data: DataConfig,
    /// Analysis and comparison periods.
    pub analysis: AnalysisConfig,
    /// Delivery-speed bands.
    pub delivery: DeliveryConfig,
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// Configuration sources (in order of priority, later overrides earlier):
    /// 1. `shopmetrics.yaml` in current directory (if exists)
    /// 2. File specified by `path` argument (if provided)
    /// 3. File specified by `CONFIG_ENV_VAR` environment variable (if set)
    /// 4. Environment variables with `CONFIG_ENV_PREFIX` prefix, e.g.
    ///    `SHOPMETRICS__ANALYSIS__YEAR=2022`
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat};

        let mut builder = ConfigLib::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        let config: Config = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Check month range, top-N and the band table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_month(self.analysis.month)?;
        if self.analysis.top_categories == 0 {
            return Err(ConfigError::ZeroTopCategories);
        }
        self.delivery.bands()?;
        Ok(())
    }

    /// Create config for testing.
    pub fn for_test() -> Self {
        Self::default()
    }
}
