//! Traversal module.
//!
//! The state machine that walks a decision graph and accumulates learning
//! examples.

mod engine;
mod report;

pub use engine::TraversalEngine;
pub use report::{TraversalEnd, TraversalReport};
