//! Dataset Adapters
//!
//! Implementations of the DatasetStore port.
//!
//! - **FileDatasetStore** - JSON or YAML file on disk
//! - **InMemoryDatasetStore** - Test double

mod file_dataset_store;
mod in_memory_dataset_store;

pub use file_dataset_store::FileDatasetStore;
pub use in_memory_dataset_store::InMemoryDatasetStore;
