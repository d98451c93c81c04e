//! File-based Graph Source Adapter
//!
//! Loads a decision graph from a JSON file, or YAML when the file ends in
//! `.yaml` / `.yml`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::graph::DecisionGraph;
use crate::ports::{GraphSource, GraphSourceError};

/// Serialization format of a graph file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Json,
    Yaml,
}

impl GraphFormat {
    /// Pick the format from the file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                GraphFormat::Yaml
            }
            _ => GraphFormat::Json,
        }
    }

    /// Decode a graph document
    pub fn decode(&self, text: &str) -> Result<DecisionGraph, GraphSourceError> {
        match self {
            GraphFormat::Json => {
                serde_json::from_str(text).map_err(|e| GraphSourceError::Format(e.to_string()))
            }
            GraphFormat::Yaml => {
                serde_yaml::from_str(text).map_err(|e| GraphSourceError::Format(e.to_string()))
            }
        }
    }
}

/// Graph source reading a single file
#[derive(Debug, Clone)]
pub struct FileGraphSource {
    path: PathBuf,
}

impl FileGraphSource {
    /// # Example
    /// ```ignore
    /// let graph = FileGraphSource::new("resources/decision_tree.json").load().await?;
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl GraphSource for FileGraphSource {
    async fn load(&self) -> Result<DecisionGraph, GraphSourceError> {
        let text = fs::read_to_string(&self.path)
            .await
            .map_err(|e| GraphSourceError::Io {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        let graph = GraphFormat::from_path(&self.path).decode(&text)?;
        tracing::debug!(path = %self.path.display(), nodes = graph.len(), "decision graph loaded");
        Ok(graph)
    }
}
