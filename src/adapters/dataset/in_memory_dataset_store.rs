//! In-Memory Dataset Store Adapter
//!
//! Keeps the last saved dataset in memory. Useful for testing.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::learning::LearningDataset;
use crate::ports::{DatasetStore, DatasetStoreError};

/// In-memory storage for learning datasets
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatasetStore {
    saved: Arc<RwLock<Option<LearningDataset>>>,
}

impl InMemoryDatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved dataset, if any save happened
    pub fn saved(&self) -> Option<LearningDataset> {
        self.saved.read().ok().and_then(|saved| saved.clone())
    }
}

#[async_trait]
impl DatasetStore for InMemoryDatasetStore {
    async fn save(&self, dataset: &LearningDataset) -> Result<(), DatasetStoreError> {
        let mut saved = self
            .saved
            .write()
            .map_err(|e| DatasetStoreError::Io(format!("Lock poisoned: {}", e)))?;
        *saved = Some(dataset.clone());
        Ok(())
    }

    async fn load(&self) -> Result<LearningDataset, DatasetStoreError> {
        let saved = self
            .saved
            .read()
            .map_err(|e| DatasetStoreError::Io(format!("Lock poisoned: {}", e)))?;
        Ok(saved.clone().unwrap_or_default())
    }
}
