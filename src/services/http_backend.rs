use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::constants::{COMPLETION_TEMPERATURE, COMPLETION_TOP_P, REQUEST_TIMEOUT_SECS};
use crate::enums::completion_error::CompletionError;
use crate::structs::ai::chat_message::ChatMessage;
use crate::structs::ai::chat_request::ChatRequest;
use crate::structs::config::completion_config::CompletionConfig;
use crate::traits::chat_backend::ChatBackend;

/// reqwest-backed `ChatBackend` speaking the OpenAI-compatible
/// `/chat/completions` wire shape, including the deployment URL variant.
#[derive(Clone)]
pub struct HttpChatBackend {
    client: Client,
    endpoint: String,
    api_key: String,
    model: Option<String>,
    deployment_id: Option<String>,
    api_version: Option<String>,
}

impl HttpChatBackend {
    pub fn new(config: &CompletionConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.resolved_api_key(),
            model: config.model.clone(),
            deployment_id: config.deployment_id.clone(),
            api_version: config.api_version.clone(),
        }
    }

    fn request_url(&self) -> String {
        match (&self.deployment_id, &self.api_version) {
            (Some(deployment), Some(version)) => format!(
                "{}/openai/deployments/{}/chat/completions?api-version={}",
                self.endpoint, deployment, version
            ),
            _ => format!("{}/chat/completions", self.endpoint),
        }
    }

    fn get_request(&self, system_prompt: &str, user_prompt: &str, max_tokens: u32) -> ChatRequest {
        let messages = vec![
            ChatMessage {
                role: "system".to_string(),
                content: system_prompt.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: user_prompt.to_string(),
            },
        ];

        ChatRequest {
            // Deployment-style endpoints carry the model in the URL instead.
            model: if self.deployment_id.is_some() {
                None
            } else {
                self.model.clone()
            },
            messages,
            max_tokens,
            temperature: COMPLETION_TEMPERATURE,
            top_p: COMPLETION_TOP_P,
        }
    }

    async fn make_request(
        &self,
        url: String,
        request_body: ChatRequest,
    ) -> Result<reqwest::Response, CompletionError> {
        let mut request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body);

        request = if self.deployment_id.is_some() {
            request.header("api-key", &self.api_key)
        } else {
            request.header("Authorization", format!("Bearer {}", self.api_key))
        };

        request
            .send()
            .await
            .map_err(|e| CompletionError::NetworkError(e.to_string()))
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<String, CompletionError> {
        let url = self.request_url();
        let request_body = self.get_request(system_prompt, user_prompt, max_tokens);

        let response = self.make_request(url, request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status.as_u16() {
                401 | 403 => CompletionError::AuthenticationError(error_text),
                429 => CompletionError::ApiError(format!("Rate limit exceeded: {}", error_text)),
                _ => CompletionError::ApiError(format!("HTTP {}: {}", status, error_text)),
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CompletionError::SerializationError(e.to_string()))?;

        let content = json
            .get("choices")
            .and_then(|choices| choices.as_array())
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| {
                CompletionError::SerializationError("No content in response".to_string())
            })?;

        Ok(content.to_string())
    }
}
