//! Response Provider Port - Source of answers during a traversal.
//!
//! The engine asks for one answer per visited node, keyed by node id, and one
//! final confirmation under [`OUTCOME_PROMPT_ID`](crate::domain::foundation::OUTCOME_PROMPT_ID).
//! Returning `None` (or an empty string) ends the run through the exit
//! sentinel, which is also how callers cancel a traversal.

use async_trait::async_trait;

/// Port for soliciting responses.
#[async_trait]
pub trait ResponseProvider: Send + Sync {
    /// Returns the response for `prompt_id`, or `None` when none is available.
    async fn respond(&self, prompt_id: &str) -> Option<String>;
}
