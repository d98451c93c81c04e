//! Placeholder Trainer
//!
//! Stands in for a real model. Reports whether there is enough data and
//! returns a named artifact without learning anything.

use async_trait::async_trait;
use std::sync::Arc;

use crate::ports::{DiagnosticSink, Trainer, TrainingArtifact};

/// Examples needed before training is attempted.
pub const DEFAULT_MIN_EXAMPLES: usize = 5;

const MODEL_NAME: &str = "mock-decision-tree";

/// Trainer that only checks dataset size.
pub struct PlaceholderTrainer {
    sink: Arc<dyn DiagnosticSink>,
    min_examples: usize,
}

impl PlaceholderTrainer {
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            sink,
            min_examples: DEFAULT_MIN_EXAMPLES,
        }
    }

    /// Overrides the minimum dataset size.
    pub fn with_min_examples(mut self, min_examples: usize) -> Self {
        self.min_examples = min_examples;
        self
    }

    pub fn min_examples(&self) -> usize {
        self.min_examples
    }
}

#[async_trait]
impl Trainer for PlaceholderTrainer {
    async fn train(&self, dataset_size: usize) -> Option<TrainingArtifact> {
        if dataset_size < self.min_examples {
            self.sink.warn(&format!(
                "Insufficient data for training ({} entries)",
                dataset_size
            ));
            return None;
        }

        self.sink
            .info(&format!("Training model with {} examples...", dataset_size));
        Some(TrainingArtifact::new(MODEL_NAME, dataset_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::diagnostics::MemorySink;
    use crate::ports::DiagnosticLevel;

    #[tokio::test]
    async fn declines_below_minimum() {
        let sink = Arc::new(MemorySink::new());
        let trainer = PlaceholderTrainer::new(sink.clone());

        assert!(trainer.train(4).await.is_none());
        assert_eq!(
            sink.entries_at(DiagnosticLevel::Warning),
            vec!["Insufficient data for training (4 entries)"]
        );
    }

    #[tokio::test]
    async fn trains_at_minimum() {
        let sink = Arc::new(MemorySink::new());
        let trainer = PlaceholderTrainer::new(sink.clone());

        let artifact = trainer.train(5).await.unwrap();
        assert_eq!(artifact.model, "mock-decision-tree");
        assert_eq!(artifact.examples_seen, 5);
        assert!(sink.contains("Training model with 5 examples..."));
    }

    #[tokio::test]
    async fn minimum_is_configurable() {
        let sink = Arc::new(MemorySink::new());
        let trainer = PlaceholderTrainer::new(sink.clone()).with_min_examples(1);

        assert_eq!(trainer.min_examples(), 1);
        assert!(trainer.train(1).await.is_some());
        assert!(sink.entries_at(DiagnosticLevel::Warning).is_empty());
    }
}
