use std::sync::Arc;

use crate::config::constants::{backoff_delay, MAX_COMPLETION_ATTEMPTS};
use crate::constants::prompts::SYSTEM_PROMPT;
use crate::enums::completion_error::CompletionError;
use crate::services::http_backend::HttpChatBackend;
use crate::structs::config::completion_config::CompletionConfig;
use crate::traits::chat_backend::ChatBackend;

/// Wraps one logical completion call: retry/backoff around the backend,
/// fence stripping and JSON parsing of the assistant content.
pub struct CompletionClient {
    backend: Arc<dyn ChatBackend>,
    max_attempts: u32,
}

impl CompletionClient {
    pub fn new(config: &CompletionConfig) -> Self {
        Self::with_backend(Arc::new(HttpChatBackend::new(config)))
    }

    pub fn with_backend(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            backend,
            max_attempts: MAX_COMPLETION_ATTEMPTS,
        }
    }

    /// Up to 3 attempts with 1s/2s waits in between; a parse failure retries
    /// exactly like a network failure, and the last error is surfaced.
    pub async fn call(
        &self,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<serde_json::Value, CompletionError> {
        let mut last_error = CompletionError::ApiError("no completion attempt made".to_string());

        for attempt in 1..=self.max_attempts {
            match self.attempt(prompt, max_tokens).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::warn!(
                        "⚠️ Completion attempt {}/{} failed: {}",
                        attempt,
                        self.max_attempts,
                        e
                    );
                    last_error = e;

                    if attempt < self.max_attempts {
                        tokio::time::sleep(backoff_delay(attempt)).await;
                    }
                }
            }
        }

        Err(last_error)
    }

    async fn attempt(
        &self,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<serde_json::Value, CompletionError> {
        let content = self.backend.send(SYSTEM_PROMPT, prompt, max_tokens).await?;
        let cleaned = strip_code_fences(&content);

        serde_json::from_str(cleaned).map_err(|e| {
            CompletionError::SerializationError(format!("Invalid JSON in completion: {}", e))
        })
    }
}

/// Removes leading/trailing markdown code fences (```json / ```) plus
/// surrounding whitespace. Models add them despite the system instruction.
pub fn strip_code_fences(content: &str) -> &str {
    let mut cleaned = content.trim();

    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest;
    }

    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest;
    }

    cleaned.trim()
}
