//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `diagnostics` - Diagnostic sinks (tracing, in-memory)
//! - `responses` - Response providers (fixtures, closures, terminal)
//! - `training` - Trainer implementations
//! - `graph` - Graph sources (JSON/YAML files)
//! - `dataset` - Dataset stores (file, in-memory)

pub mod dataset;
pub mod diagnostics;
pub mod graph;
pub mod responses;
pub mod training;

pub use dataset::{FileDatasetStore, InMemoryDatasetStore};
pub use diagnostics::{DiagnosticEntry, MemorySink, TracingSink};
pub use graph::{FileGraphSource, GraphFormat};
pub use responses::{FixtureLoadError, FixtureResponses, FnResponses, TerminalResponses};
pub use training::{PlaceholderTrainer, DEFAULT_MIN_EXAMPLES};
