//! In-Memory Diagnostic Sink
//!
//! Records diagnostics in memory.
//! Useful for testing and for callers that want to inspect a run afterwards.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::ports::{DiagnosticLevel, DiagnosticSink};

/// A single recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticEntry {
    pub level: DiagnosticLevel,
    pub message: String,
}

/// Sink that keeps every diagnostic in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<DiagnosticEntry>>,
    closed: AtomicBool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in the order they were logged.
    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.lock().clone()
    }

    /// All messages in the order they were logged.
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|entry| entry.message.clone()).collect()
    }

    /// Messages logged at `level`.
    pub fn entries_at(&self, level: DiagnosticLevel) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|entry| entry.level == level)
            .map(|entry| entry.message.clone())
            .collect()
    }

    /// Returns true if any message contains `fragment`.
    pub fn contains(&self, fragment: &str) -> bool {
        self.lock().iter().any(|entry| entry.message.contains(fragment))
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Clear all recorded entries (useful for tests)
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<DiagnosticEntry>> {
        // A poisoned buffer still holds valid entries.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for MemorySink {
    fn log(&self, level: DiagnosticLevel, message: &str) {
        self.lock().push(DiagnosticEntry {
            level,
            message: message.to_string(),
        });
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}
