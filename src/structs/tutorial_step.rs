use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorialStep {
    pub step_number: u32,
    pub title: String,
    pub description: String,
    pub chords: Vec<String>,
    pub techniques: Vec<String>,
    pub tips: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practice_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_mistakes: Option<Vec<String>>,
}
