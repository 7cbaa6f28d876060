use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::enums::difficulty::Difficulty;
use crate::structs::chord_event::{group_by_section, ChordEvent, SectionSheet};
use crate::structs::song_candidate::SongCandidate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeCapo {
    pub position: u32,
    pub chords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordAnalysis {
    pub song: SongCandidate,
    pub chords: Vec<ChordEvent>,
    pub key: String,
    pub tempo_bpm: u32,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capo_position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strumming_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_chord_map: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song_structure: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_capo: Option<AlternativeCapo>,
}

impl ChordAnalysis {
    /// Distinct chord symbols in first-appearance order.
    pub fn chord_set(&self) -> Vec<String> {
        let mut symbols: Vec<String> = Vec::new();
        for event in &self.chords {
            if !symbols.contains(&event.chord_symbol) {
                symbols.push(event.chord_symbol.clone());
            }
        }
        symbols
    }

    /// Chord chart rows grouped by consecutive section labels.
    pub fn section_sheets(&self) -> Vec<SectionSheet> {
        group_by_section(&self.chords)
    }
}
