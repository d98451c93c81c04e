//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // State errors
    InvalidStateTransition,
    OutcomeAlreadyRecorded,

    // Dataset errors
    EmptyDataset,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::OutcomeAlreadyRecorded => "OUTCOME_ALREADY_RECORDED",
            ErrorCode::EmptyDataset => "EMPTY_DATASET",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates an invalid state transition error.
    pub fn invalid_transition(from: impl fmt::Debug, to: impl fmt::Debug) -> Self {
        Self::new(
            ErrorCode::InvalidStateTransition,
            format!("Cannot transition from {:?} to {:?}", from, to),
        )
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::EmptyDataset, "No examples recorded");
        assert_eq!(format!("{}", err), "[EMPTY_DATASET] No examples recorded");
    }

    #[test]
    fn invalid_transition_names_both_states() {
        let err = DomainError::invalid_transition("Success", "Failure");
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        assert!(err.message.contains("Success"));
        assert!(err.message.contains("Failure"));
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::OutcomeAlreadyRecorded, "Outcome already set")
            .with_detail("example_index", "3");

        assert_eq!(err.details.get("example_index"), Some(&"3".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(
            format!("{}", ErrorCode::InvalidStateTransition),
            "INVALID_STATE_TRANSITION"
        );
        assert_eq!(
            format!("{}", ErrorCode::OutcomeAlreadyRecorded),
            "OUTCOME_ALREADY_RECORDED"
        );
    }
}
