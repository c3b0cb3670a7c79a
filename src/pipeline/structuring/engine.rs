use super::parser::parse_record;
use super::prompt::{build_structuring_prompt, STRUCTURING_SYSTEM_PROMPT};
use super::StructuringError;
use crate::llm::CompletionClient;

/// Turns one document's raw text into a structured record via a single
/// completion-service call. No retry: at most one call per invocation.
pub struct StructuringEngine<C: CompletionClient> {
    client: C,
}

impl<C: CompletionClient> StructuringEngine<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn structure(&self, raw_text: &str) -> Result<serde_json::Value, StructuringError> {
        let prompt = build_structuring_prompt(raw_text);
        let response = self.client.complete(STRUCTURING_SYSTEM_PROMPT, &prompt)?;

        tracing::debug!(response_length = response.len(), "structuring response received");
        parse_record(&response)
    }
}
