//! Traversal configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::ROOT_NODE_ID;

/// Traversal settings
#[derive(Debug, Clone, Deserialize)]
pub struct TraversalConfig {
    /// Node id the run starts from
    #[serde(default = "default_start_node")]
    pub start_node: String,
}

impl TraversalConfig {
    /// Validate traversal configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start_node.trim().is_empty() {
            return Err(ValidationError::MissingRequired("traversal.start_node"));
        }
        Ok(())
    }
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            start_node: default_start_node(),
        }
    }
}

fn default_start_node() -> String {
    ROOT_NODE_ID.to_string()
}
