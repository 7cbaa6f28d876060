use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use chordcoach::enums::completion_error::CompletionError;
use chordcoach::traits::chat_backend::ChatBackend;

/// Replays a fixed queue of responses, counting attempts. An exhausted queue
/// repeats the last configured response.
pub struct ScriptedBackend {
    pub calls: AtomicU32,
    responses: Mutex<VecDeque<Result<String, CompletionError>>>,
    exhausted: Result<String, CompletionError>,
}

impl ScriptedBackend {
    pub fn new(responses: Vec<Result<String, CompletionError>>) -> Self {
        let exhausted = responses
            .last()
            .cloned()
            .unwrap_or_else(|| Err(CompletionError::ApiError("script exhausted".to_string())));
        Self {
            calls: AtomicU32::new(0),
            responses: Mutex::new(responses.into()),
            exhausted,
        }
    }

    pub fn always_failing() -> Self {
        Self::new(vec![Err(CompletionError::NetworkError(
            "connection refused".to_string(),
        ))])
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn send(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
        _max_tokens: u32,
    ) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut responses = self.responses.lock().unwrap();
        responses.pop_front().unwrap_or_else(|| self.exhausted.clone())
    }
}

/// Routes replies by inspecting the user prompt, so the chord and tutorial
/// stages of one `analyze` call can behave differently.
pub struct PromptKeyedBackend {
    pub chord_response: Result<String, CompletionError>,
    pub tutorial_response: Result<String, CompletionError>,
    pub search_response: Result<String, CompletionError>,
}

impl PromptKeyedBackend {
    fn classify(user_prompt: &str) -> &'static str {
        if user_prompt.contains("step-by-step guitar tutorial") {
            "tutorial"
        } else if user_prompt.contains("chord analysis") {
            "chord"
        } else {
            "search"
        }
    }
}

#[async_trait]
impl ChatBackend for PromptKeyedBackend {
    async fn send(
        &self,
        _system_prompt: &str,
        user_prompt: &str,
        _max_tokens: u32,
    ) -> Result<String, CompletionError> {
        match Self::classify(user_prompt) {
            "tutorial" => self.tutorial_response.clone(),
            "chord" => self.chord_response.clone(),
            _ => self.search_response.clone(),
        }
    }
}

pub fn valid_tutorial_json() -> String {
    serde_json::json!({
        "overview": "Model-authored tutorial overview",
        "difficulty": "Intermediate",
        "estimated_minutes": 40,
        "steps": [
            {"title": "Shapes", "description": "Learn the shapes", "chords": ["C"], "techniques": [], "tips": []},
            {"title": "Changes", "description": "Practice changes", "chords": ["C", "G"], "techniques": [], "tips": []}
        ],
        "practice_notes": "Model practice notes"
    })
    .to_string()
}
