//! Fixture Response Provider
//!
//! Answers prompts from a fixed map keyed by prompt id, recording every
//! request for later verification.
//!
//! # Example
//!
//! ```ignore
//! let responses = FixtureResponses::new()
//!     .with("root", "Building a treehouse was awesome!")
//!     .with(OUTCOME_PROMPT_ID, "yes");
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use crate::ports::ResponseProvider;

/// Errors that can occur while loading a fixture file
#[derive(Debug, thiserror::Error)]
pub enum FixtureLoadError {
    #[error("Cannot read response fixture {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Malformed response fixture: {0}")]
    Format(String),
}

/// Response provider backed by a prompt id -> answer map.
#[derive(Debug, Default)]
pub struct FixtureResponses {
    answers: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl FixtureResponses {
    /// Create an empty fixture that answers nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fixture from an existing map
    pub fn from_map(answers: HashMap<String, String>) -> Self {
        Self {
            answers,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Load a fixture from a JSON object of prompt id -> answer
    ///
    /// # Errors
    /// Returns `FixtureLoadError` if the file cannot be read or decoded
    pub async fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, FixtureLoadError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FixtureLoadError::Io {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        let answers = serde_json::from_str(&json)
            .map_err(|e| FixtureLoadError::Format(e.to_string()))?;
        Ok(Self::from_map(answers))
    }

    /// Set the answer for a prompt, replacing any previous one
    pub fn with(mut self, prompt_id: impl Into<String>, answer: impl Into<String>) -> Self {
        self.answers.insert(prompt_id.into(), answer.into());
        self
    }

    /// Prompt ids requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ResponseProvider for FixtureResponses {
    async fn respond(&self, prompt_id: &str) -> Option<String> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(prompt_id.to_string());
        }
        self.answers.get(prompt_id).cloned()
    }
}
