//! Dataset Store Port - Persistence for collected learning examples.

use async_trait::async_trait;

use crate::domain::learning::LearningDataset;

/// Errors that can occur while persisting a dataset
#[derive(Debug, thiserror::Error)]
pub enum DatasetStoreError {
    #[error("Failed to serialize dataset: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Port for saving learning datasets
#[async_trait]
pub trait DatasetStore: Send + Sync {
    /// Save the full dataset, replacing anything saved before
    ///
    /// # Errors
    /// Returns `DatasetStoreError` if serialization or the write fails
    async fn save(&self, dataset: &LearningDataset) -> Result<(), DatasetStoreError>;

    /// Load a previously saved dataset
    ///
    /// # Errors
    /// Returns `DatasetStoreError` if the stored data cannot be read or decoded
    async fn load(&self) -> Result<LearningDataset, DatasetStoreError>;
}
