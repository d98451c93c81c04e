//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, well-known node ids, the state machine trait,
//! and error types shared by the rest of the domain.

mod errors;
mod ids;
mod state_machine;

pub use errors::{DomainError, ErrorCode};
pub use ids::{RunId, EXIT_NODE_ID, OUTCOME_PROMPT_ID, ROOT_NODE_ID};
pub use state_machine::StateMachine;
