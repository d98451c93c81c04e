//! Graph Adapters
//!
//! Implementations of the GraphSource port.

mod file_graph_source;

pub use file_graph_source::{FileGraphSource, GraphFormat};
