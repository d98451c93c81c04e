//! Learning example records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::classification::ResponseAttributes;
use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};

/// Post-hoc label for the last step of a run.
///
/// Serialized as `""`, `"success"` or `"failure"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Outcome {
    /// No confirmation received yet.
    #[default]
    #[serde(rename = "")]
    Pending,

    #[serde(rename = "success")]
    Success,

    #[serde(rename = "failure")]
    Failure,
}

impl Outcome {
    /// Interprets a confirmation answer: "yes" in any case means success.
    pub fn from_confirmation(answer: &str) -> Self {
        if answer.trim().eq_ignore_ascii_case("yes") {
            Outcome::Success
        } else {
            Outcome::Failure
        }
    }

    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Pending => "",
            Outcome::Success => "success",
            Outcome::Failure => "failure",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StateMachine for Outcome {
    fn can_transition_to(&self, target: &Self) -> bool {
        use Outcome::*;
        matches!((self, target), (Pending, Success) | (Pending, Failure))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use Outcome::*;
        match self {
            Pending => vec![Success, Failure],
            Success | Failure => vec![],
        }
    }
}

/// One recorded step of a traversal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningExample {
    /// The raw answer text.
    pub response_text: String,
    /// Features derived from the answer.
    pub attributes: ResponseAttributes,
    /// Node id chosen as the next step.
    pub action: String,
    outcome: Outcome,
}

impl LearningExample {
    /// Creates an example with a pending outcome.
    pub fn new(
        response_text: impl Into<String>,
        attributes: ResponseAttributes,
        action: impl Into<String>,
    ) -> Self {
        Self {
            response_text: response_text.into(),
            attributes,
            action: action.into(),
            outcome: Outcome::Pending,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Sets the outcome. Only a pending outcome can be set.
    pub fn set_outcome(&mut self, outcome: Outcome) -> Result<(), DomainError> {
        if !self.outcome.is_pending() {
            return Err(DomainError::new(
                ErrorCode::OutcomeAlreadyRecorded,
                format!("Outcome already recorded as '{}'", self.outcome),
            ));
        }
        self.outcome = self.outcome.transition_to(outcome)?;
        Ok(())
    }
}
