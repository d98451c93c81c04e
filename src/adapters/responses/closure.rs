//! Closure Response Provider
//!
//! Adapts a plain function of the prompt id into a response provider.

use async_trait::async_trait;

use crate::ports::ResponseProvider;

/// Response provider that calls a function for every prompt.
pub struct FnResponses<F> {
    respond: F,
}

impl<F> FnResponses<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    pub fn new(respond: F) -> Self {
        Self { respond }
    }
}

#[async_trait]
impl<F> ResponseProvider for FnResponses<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    async fn respond(&self, prompt_id: &str) -> Option<String> {
        (self.respond)(prompt_id)
    }
}
