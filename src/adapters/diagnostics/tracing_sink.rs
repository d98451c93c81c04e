//! Tracing Diagnostic Sink
//!
//! Forwards diagnostics to the `tracing` subscriber installed by the binary.

use crate::ports::{DiagnosticLevel, DiagnosticSink};

/// Sink that emits every diagnostic as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingSink {
    fn log(&self, level: DiagnosticLevel, message: &str) {
        match level {
            DiagnosticLevel::Info => tracing::info!(target: "decision_walker::diagnostics", "{}", message),
            DiagnosticLevel::Warning => tracing::warn!(target: "decision_walker::diagnostics", "{}", message),
            DiagnosticLevel::Error => tracing::error!(target: "decision_walker::diagnostics", "{}", message),
        }
    }

    fn close(&self) {
        tracing::debug!(target: "decision_walker::diagnostics", "diagnostic sink closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_without_subscriber_is_a_no_op() {
        let sink = TracingSink::new();
        sink.info("hello");
        sink.warn("careful");
        sink.error("broken");
        sink.close();
    }
}
