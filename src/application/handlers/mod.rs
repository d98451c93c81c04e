//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod questionnaire;

pub use questionnaire::{
    RunError, RunQuestionnaireCommand, RunQuestionnaireHandler, RunQuestionnaireResult,
};
