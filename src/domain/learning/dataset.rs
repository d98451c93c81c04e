//! Caller-owned learning dataset.
//!
//! Append-only, except that the outcome of the most recent example can be
//! set once when a run reaches its terminus.

use serde::{Deserialize, Serialize};

use super::example::{LearningExample, Outcome};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Tally of outcome labels across a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub success: usize,
    pub failure: usize,
    pub pending: usize,
}

/// Ordered collection of learning examples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LearningDataset {
    examples: Vec<LearningExample>,
}

impl LearningDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an example.
    pub fn push(&mut self, example: LearningExample) {
        self.examples.push(example);
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn last(&self) -> Option<&LearningExample> {
        self.examples.last()
    }

    pub fn examples(&self) -> &[LearningExample] {
        &self.examples
    }

    /// Sets the outcome of the most recent example.
    ///
    /// # Errors
    /// - `EmptyDataset` if nothing has been recorded
    /// - `OutcomeAlreadyRecorded` if the outcome was already set
    pub fn record_outcome(&mut self, outcome: Outcome) -> Result<(), DomainError> {
        let index = self.examples.len().checked_sub(1).ok_or_else(|| {
            DomainError::new(ErrorCode::EmptyDataset, "No learning example to label")
        })?;
        self.examples[index]
            .set_outcome(outcome)
            .map_err(|err| err.with_detail("example_index", index.to_string()))
    }

    /// Counts examples per outcome.
    pub fn outcome_counts(&self) -> OutcomeCounts {
        self.examples
            .iter()
            .fold(OutcomeCounts::default(), |mut counts, example| {
                match example.outcome() {
                    Outcome::Success => counts.success += 1,
                    Outcome::Failure => counts.failure += 1,
                    Outcome::Pending => counts.pending += 1,
                }
                counts
            })
    }

    /// Removes every example.
    pub fn reset(&mut self) {
        self.examples.clear();
    }
}

impl<'a> IntoIterator for &'a LearningDataset {
    type Item = &'a LearningExample;
    type IntoIter = std::slice::Iter<'a, LearningExample>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}
