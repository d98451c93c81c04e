//! Diagnostic Sink Port - Destination for run diagnostics.
//!
//! The validator, classifier and traversal engine report what they do through
//! this port so callers can route messages to logs, files, or test buffers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiagnosticLevel {
    #[default]
    Info,
    Warning,
    Error,
}

impl DiagnosticLevel {
    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            DiagnosticLevel::Info => "INFO",
            DiagnosticLevel::Warning => "WARNING",
            DiagnosticLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Port for emitting diagnostics.
///
/// Logging is synchronous and must never fail the caller.
pub trait DiagnosticSink: Send + Sync {
    /// Records a message at the given level.
    fn log(&self, level: DiagnosticLevel, message: &str);

    /// Records an informational message.
    fn info(&self, message: &str) {
        self.log(DiagnosticLevel::Info, message);
    }

    /// Records a warning.
    fn warn(&self, message: &str) {
        self.log(DiagnosticLevel::Warning, message);
    }

    /// Records an error.
    fn error(&self, message: &str) {
        self.log(DiagnosticLevel::Error, message);
    }

    /// Flushes buffered output at the end of a run.
    fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        entries: Mutex<Vec<(DiagnosticLevel, String)>>,
    }

    impl DiagnosticSink for Recorder {
        fn log(&self, level: DiagnosticLevel, message: &str) {
            self.entries.lock().unwrap().push((level, message.to_string()));
        }
    }

    #[test]
    fn level_labels_match_wire_names() {
        assert_eq!(DiagnosticLevel::Info.to_string(), "INFO");
        assert_eq!(DiagnosticLevel::Warning.to_string(), "WARNING");
        assert_eq!(DiagnosticLevel::Error.to_string(), "ERROR");
    }

    #[test]
    fn level_serializes_uppercase() {
        let json = serde_json::to_string(&DiagnosticLevel::Warning).unwrap();
        assert_eq!(json, "\"WARNING\"");
    }

    #[test]
    fn helpers_forward_to_log_with_matching_level() {
        let sink = Recorder::default();
        sink.info("a");
        sink.warn("b");
        sink.error("c");

        let entries = sink.entries.lock().unwrap();
        assert_eq!(
            *entries,
            vec![
                (DiagnosticLevel::Info, "a".to_string()),
                (DiagnosticLevel::Warning, "b".to_string()),
                (DiagnosticLevel::Error, "c".to_string()),
            ]
        );
    }
}
