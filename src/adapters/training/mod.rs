//! Training Adapters
//!
//! Implementations of the Trainer port.

mod placeholder_trainer;

pub use placeholder_trainer::{PlaceholderTrainer, DEFAULT_MIN_EXAMPLES};
