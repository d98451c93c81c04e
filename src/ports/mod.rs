//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Traversal Ports
//!
//! - `ResponseProvider` - Supplies an answer for each prompt
//! - `DiagnosticSink` - Receives leveled diagnostic messages
//! - `Trainer` - Optional training hook run after each step
//!
//! ## Persistence Ports
//!
//! - `GraphSource` - Loads a decision graph
//! - `DatasetStore` - Saves and loads learning datasets

mod dataset_store;
mod diagnostic_sink;
mod graph_source;
mod response_provider;
mod trainer;

pub use dataset_store::{DatasetStore, DatasetStoreError};
pub use diagnostic_sink::{DiagnosticLevel, DiagnosticSink};
pub use graph_source::{GraphSource, GraphSourceError};
pub use response_provider::ResponseProvider;
pub use trainer::{Trainer, TrainingArtifact};
