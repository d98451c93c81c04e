//! Dataset persistence configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Where collected learning examples are written
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DatasetConfig {
    /// Output file (JSON, or YAML by extension); nothing is saved when unset
    pub output_path: Option<PathBuf>,
}
