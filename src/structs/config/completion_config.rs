use serde::{Deserialize, Serialize};

use crate::config::constants::PLACEHOLDER_API_KEY;
use crate::helpers::config_helper::ConfigHelper;

/// Settings for the chat-completion endpoint. `deployment_id`/`api_version`
/// select the deployment-style URL variant; when absent, the plain
/// `/chat/completions` form with a Bearer header is used.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CompletionConfig {
    #[serde(default = "ConfigHelper::default_endpoint")]
    pub endpoint: String,

    #[serde(default = "ConfigHelper::default_api_key")]
    pub api_key: String,

    /// Environment variable consulted before `api_key`.
    #[serde(default)]
    pub api_key_env: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub deployment_id: Option<String>,

    #[serde(default)]
    pub api_version: Option<String>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            endpoint: ConfigHelper::default_endpoint(),
            api_key: ConfigHelper::default_api_key(),
            api_key_env: Some("CHORDCOACH_API_KEY".to_string()),
            model: Some(ConfigHelper::default_model()),
            deployment_id: None,
            api_version: None,
        }
    }
}

impl CompletionConfig {
    pub fn resolved_api_key(&self) -> String {
        if let Some(var) = &self.api_key_env {
            if let Ok(key) = std::env::var(var) {
                if !key.trim().is_empty() {
                    return key;
                }
            }
        }
        self.api_key.clone()
    }

    /// Checked once by the orchestrator constructor. A placeholder or empty
    /// key means no network call is ever attempted.
    pub fn is_configured(&self) -> bool {
        let key = self.resolved_api_key();
        !self.endpoint.trim().is_empty() && !key.trim().is_empty() && key != PLACEHOLDER_API_KEY
    }
}
