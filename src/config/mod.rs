//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DECISION_WALKER` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a usable config.
//!
//! # Example
//!
//! ```no_run
//! use decision_walker::config::AppConfig;
//!
//! let config = AppConfig::load_validated().expect("Invalid configuration");
//!
//! println!("Graph loaded from {}", config.graph.path.display());
//! ```

mod dataset;
mod error;
mod graph;
mod logging;
mod training;
mod traversal;

pub use dataset::DatasetConfig;
pub use error::{ConfigError, ValidationError};
pub use graph::GraphConfig;
pub use logging::LoggingConfig;
pub use training::TrainingConfig;
pub use traversal::TraversalConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Decision graph location
    #[serde(default)]
    pub graph: GraphConfig,

    /// Traversal settings (start node)
    #[serde(default)]
    pub traversal: TraversalConfig,

    /// Placeholder trainer settings
    #[serde(default)]
    pub training: TrainingConfig,

    /// Learning dataset output
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DECISION_WALKER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DECISION_WALKER__GRAPH__PATH=trees/a.yaml` -> `graph.path = trees/a.yaml`
    /// - `DECISION_WALKER__TRAINING__MIN_EXAMPLES=10` -> `training.min_examples = 10`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DECISION_WALKER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration and validate it in one step
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` for unparseable values and
    /// `ConfigError::ValidationFailed` for values that fail [`AppConfig::validate()`].
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.graph.validate()?;
        self.traversal.validate()?;
        self.training.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
