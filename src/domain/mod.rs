//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, state machine)
//! - `graph` - Decision graph model and structural validation
//! - `classification` - Heuristic response classifier and attribute extraction
//! - `learning` - Learning examples and the caller-owned dataset
//! - `traversal` - Engine that walks a graph and records examples

pub mod classification;
pub mod foundation;
pub mod graph;
pub mod learning;
pub mod traversal;
