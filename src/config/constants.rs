use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

pub const MAX_COMPLETION_ATTEMPTS: u32 = 3;
pub const BACKOFF_BASE_MS: u64 = 1000;
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

pub const COMPLETION_TEMPERATURE: f32 = 0.3;
pub const COMPLETION_TOP_P: f32 = 0.8;

pub const SEARCH_MAX_TOKENS: u32 = 1024;
pub const CHORD_MAX_TOKENS: u32 = 4096;
pub const TUTORIAL_MAX_TOKENS: u32 = 4096;

pub const SEARCH_RESULT_LIMIT: usize = 5;
pub const FALLBACK_RESULT_LIMIT: usize = 3;

/// Exponential backoff between completion attempts: 1s, 2s, ...
pub fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_millis(BACKOFF_BASE_MS * 2u64.pow(attempt.saturating_sub(1)))
}
