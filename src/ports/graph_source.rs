//! Graph Source Port - Where decision graphs come from.

use async_trait::async_trait;

use crate::domain::graph::DecisionGraph;

/// Errors that can occur while loading a decision graph
#[derive(Debug, thiserror::Error)]
pub enum GraphSourceError {
    #[error("Malformed decision graph: {0}")]
    Format(String),

    #[error("Cannot read decision graph from {path}: {reason}")]
    Io { path: String, reason: String },
}

/// Port for loading a decision graph
#[async_trait]
pub trait GraphSource: Send + Sync {
    /// Load the graph
    ///
    /// # Errors
    /// Returns `GraphSourceError::Io` if the source cannot be read and
    /// `GraphSourceError::Format` if it does not decode into a graph
    async fn load(&self) -> Result<DecisionGraph, GraphSourceError>;
}
