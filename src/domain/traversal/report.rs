//! Traversal run results.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::RunId;
use crate::domain::learning::Outcome;

/// Why a traversal stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraversalEnd {
    /// Validation failed; no step was taken.
    Rejected,
    /// A terminus node was reached and processed.
    Terminus { node_id: String },
    /// The current id did not resolve to a node (including the exit sentinel).
    Unresolved { node_id: String },
}

/// Summary of a single traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalReport {
    pub run_id: RunId,
    pub end: TraversalEnd,
    /// Node ids visited, in order.
    pub path: Vec<String>,
    /// Learning examples recorded by this run.
    pub steps: usize,
    /// Outcome applied to the last example, if one was applied.
    pub outcome: Option<Outcome>,
}

impl TraversalReport {
    pub(crate) fn rejected(run_id: RunId) -> Self {
        Self {
            run_id,
            end: TraversalEnd::Rejected,
            path: Vec::new(),
            steps: 0,
            outcome: None,
        }
    }

    /// True if the run ended at a terminus node.
    pub fn reached_terminus(&self) -> bool {
        matches!(self.end, TraversalEnd::Terminus { .. })
    }

    pub fn was_rejected(&self) -> bool {
        matches!(self.end, TraversalEnd::Rejected)
    }
}
