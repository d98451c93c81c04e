//! Trainer Port - Optional model training hook.
//!
//! The traversal engine offers the trainer a chance to run after every
//! recorded step. Results are informational only and never change routing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque result of a training pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingArtifact {
    /// Name of the model that produced this artifact.
    pub model: String,
    /// Number of examples the model saw.
    pub examples_seen: usize,
    /// When training finished.
    pub trained_at: DateTime<Utc>,
}

impl TrainingArtifact {
    /// Creates an artifact stamped with the current time.
    pub fn new(model: impl Into<String>, examples_seen: usize) -> Self {
        Self {
            model: model.into(),
            examples_seen,
            trained_at: Utc::now(),
        }
    }
}

/// Port for training on the accumulated learning dataset.
#[async_trait]
pub trait Trainer: Send + Sync {
    /// Trains on a dataset of `dataset_size` examples.
    ///
    /// # Returns
    /// `None` when there is not enough data to train on.
    async fn train(&self, dataset_size: usize) -> Option<TrainingArtifact>;
}
