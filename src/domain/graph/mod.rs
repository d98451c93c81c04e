//! Decision graph module.
//!
//! Node model, keyed graph container, and the structural validator that
//! must pass before any traversal starts.

mod node;
mod validator;

pub use node::{DecisionGraph, DecisionNode, NodeType};
pub use validator::{GraphValidator, StructuralViolation, ValidationReport};
