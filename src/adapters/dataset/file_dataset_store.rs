//! File-based Dataset Store Adapter
//!
//! Writes the learning dataset as a single JSON document (pretty printed),
//! or YAML when the path ends in `.yaml` / `.yml`. Parent directories are
//! created on save. Loading a path that does not exist yields an empty
//! dataset so runs can accumulate into a fresh file.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::learning::LearningDataset;
use crate::ports::{DatasetStore, DatasetStoreError};

/// File-based storage for learning datasets
#[derive(Debug, Clone)]
pub struct FileDatasetStore {
    path: PathBuf,
}

impl FileDatasetStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_yaml(&self) -> bool {
        matches!(
            self.path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        )
    }

    fn encode(&self, dataset: &LearningDataset) -> Result<String, DatasetStoreError> {
        if self.is_yaml() {
            serde_yaml::to_string(dataset)
                .map_err(|e| DatasetStoreError::Serialization(e.to_string()))
        } else {
            serde_json::to_string_pretty(dataset)
                .map_err(|e| DatasetStoreError::Serialization(e.to_string()))
        }
    }

    fn decode(&self, text: &str) -> Result<LearningDataset, DatasetStoreError> {
        if self.is_yaml() {
            serde_yaml::from_str(text).map_err(|e| DatasetStoreError::Serialization(e.to_string()))
        } else {
            serde_json::from_str(text).map_err(|e| DatasetStoreError::Serialization(e.to_string()))
        }
    }
}

#[async_trait]
impl DatasetStore for FileDatasetStore {
    async fn save(&self, dataset: &LearningDataset) -> Result<(), DatasetStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DatasetStoreError::Io(e.to_string()))?;
        }

        let text = self.encode(dataset)?;
        fs::write(&self.path, text)
            .await
            .map_err(|e| DatasetStoreError::Io(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), examples = dataset.len(), "dataset saved");
        Ok(())
    }

    async fn load(&self) -> Result<LearningDataset, DatasetStoreError> {
        if !fs::try_exists(&self.path)
            .await
            .map_err(|e| DatasetStoreError::Io(e.to_string()))?
        {
            return Ok(LearningDataset::new());
        }

        let text = fs::read_to_string(&self.path)
            .await
            .map_err(|e| DatasetStoreError::Io(e.to_string()))?;
        self.decode(&text)
    }
}
