//! Questionnaire handlers.

mod run_questionnaire;

pub use run_questionnaire::{
    RunError, RunQuestionnaireCommand, RunQuestionnaireHandler, RunQuestionnaireResult,
};
