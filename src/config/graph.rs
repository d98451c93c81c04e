//! Decision graph configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the decision graph is loaded from
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    /// Path to a JSON or YAML graph file
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl GraphConfig {
    /// Validate graph configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("graph.path"));
        }
        Ok(())
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("resources/decision_tree.json")
}
