use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::enums::difficulty::Difficulty;
use crate::structs::tutorial_step::TutorialStep;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayingTips {
    pub strumming: String,
    pub rhythm: String,
    pub transitions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutorial {
    pub overview: String,
    pub difficulty: Difficulty,
    pub estimated_minutes: u32,
    pub steps: Vec<TutorialStep>,
    pub practice_notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    /// Chord symbol -> ASCII tab diagram.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chord_diagrams: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playing_tips: Option<PlayingTips>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_tips: Option<Vec<String>>,
}
