use std::fs;
use std::path::PathBuf;

use crate::errors::CoachResult;
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(".chordcoach/config.toml"))
            .unwrap_or_default()
    }

    pub fn load() -> CoachResult<Config> {
        let path = Self::config_path();

        if path.exists() {
            log::info!("📋 Loading config from: {}", path.display());
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            return Ok(config);
        }

        Ok(Config::default())
    }

    pub fn create_sample_config() -> CoachResult<()> {
        let sample_config = r#"# ChordCoach Configuration

[completion]
# Chat-completion endpoint base URL
endpoint = "https://api.openai.com/v1"

# API key, or leave the placeholder and set the environment variable below.
# While the placeholder is in place, ChordCoach serves built-in fallback data
# and never touches the network.
api_key = "YOUR_API_KEY_HERE"
api_key_env = "CHORDCOACH_API_KEY"

# Model identifier for plain /chat/completions endpoints
model = "gpt-4o-mini"

# Deployment-style endpoints (e.g. Azure OpenAI) use these two instead of model:
# deployment_id = "gpt-4o-mini"
# api_version = "2024-02-01"
"#;
        let dir = dirs::home_dir()
            .map(|d| d.join(".chordcoach"))
            .unwrap_or_default();
        fs::create_dir_all(&dir)?;

        let path = Self::config_path();
        fs::write(&path, sample_config)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }
}
