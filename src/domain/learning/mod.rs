//! Learning data module.
//!
//! Records produced by traversals for later offline training.

mod dataset;
mod example;

pub use dataset::{LearningDataset, OutcomeCounts};
pub use example::{LearningExample, Outcome};
