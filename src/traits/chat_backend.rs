use async_trait::async_trait;

use crate::enums::completion_error::CompletionError;

/// One round trip to a chat-completion service: system instruction + user
/// prompt in, raw assistant message content out. The HTTP implementation
/// lives in `services::http_backend`; tests substitute scripted backends.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<String, CompletionError>;
}
