//! Training hook configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::training::DEFAULT_MIN_EXAMPLES;

/// Placeholder trainer settings
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingConfig {
    /// Offer the dataset to the trainer after each step
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Examples needed before training runs
    #[serde(default = "default_min_examples")]
    pub min_examples: usize,
}

impl TrainingConfig {
    /// Validate training configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_examples == 0 {
            return Err(ValidationError::InvalidTrainingMinimum);
        }
        Ok(())
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            min_examples: default_min_examples(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_min_examples() -> usize {
    DEFAULT_MIN_EXAMPLES
}
