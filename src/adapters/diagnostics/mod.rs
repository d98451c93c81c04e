//! Diagnostic Adapters
//!
//! Implementations of the DiagnosticSink port.
//!
//! - **TracingSink** - Forwards to `tracing` (production)
//! - **MemorySink** - Records entries in memory (testing/inspection)

mod memory_sink;
mod tracing_sink;

pub use memory_sink::{DiagnosticEntry, MemorySink};
pub use tracing_sink::TracingSink;
