//! Schema-directed decoding of loosely-shaped model JSON into fully-defaulted
//! entities. Every field has a designated default; nothing here can fail.
//! Unknown extra fields are dropped.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::enums::difficulty::Difficulty;
use crate::helpers::link_builder;
use crate::structs::chord_analysis::{AlternativeCapo, ChordAnalysis};
use crate::structs::chord_event::ChordEvent;
use crate::structs::song_candidate::SongCandidate;
use crate::structs::tutorial::{PlayingTips, Tutorial};
use crate::structs::tutorial_step::TutorialStep;

pub const DEFAULT_SONG_DURATION_SECS: u32 = 180;
pub const DEFAULT_KEY: &str = "C Major";
pub const DEFAULT_TEMPO_BPM: u32 = 120;
pub const DEFAULT_CHORD_SYMBOL: &str = "C";
pub const DEFAULT_CHORD_DURATION_SECS: f64 = 4.0;
pub const DEFAULT_SECTION: &str = "verse";
pub const DEFAULT_TUTORIAL_MINUTES: u32 = 30;

fn str_field(value: &Value, key: &str, default: &str) -> String {
    match value.get(key).and_then(|v| v.as_str()) {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}

fn opt_str_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .filter(|s| !s.trim().is_empty())
}

fn opt_u32_field(value: &Value, key: &str) -> Option<u32> {
    value.get(key).and_then(|v| v.as_u64()).map(|n| n as u32)
}

fn u32_field(value: &Value, key: &str, default: u32) -> u32 {
    opt_u32_field(value, key).unwrap_or(default)
}

fn f64_field(value: &Value, key: &str, default: f64) -> f64 {
    value.get(key).and_then(|v| v.as_f64()).unwrap_or(default)
}

fn str_vec_field(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str())
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

fn opt_str_vec_field(value: &Value, key: &str) -> Option<Vec<String>> {
    let items = str_vec_field(value, key);
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

fn opt_str_map_field(value: &Value, key: &str) -> Option<BTreeMap<String, String>> {
    let map: BTreeMap<String, String> = value
        .get(key)
        .and_then(|v| v.as_object())
        .map(|object| {
            object
                .iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect()
        })
        .unwrap_or_default();

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn difficulty_field(value: &Value, key: &str, default: Difficulty) -> Difficulty {
    match value.get(key).and_then(|v| v.as_str()) {
        Some(raw) => Difficulty::parse_lenient(raw),
        None => default,
    }
}

/// One search hit. Links are synthesized from the normalized artist + title.
pub fn normalize_song_candidate(value: &Value) -> SongCandidate {
    let title = str_field(value, "title", "Unknown Title");
    let artist = str_field(value, "artist", "Unknown Artist");

    let duration_seconds = match value.get("duration_seconds").and_then(|v| v.as_i64()) {
        Some(n) if n > 0 => n as u32,
        _ => DEFAULT_SONG_DURATION_SECS,
    };

    let (thumbnail_url, canonical_url) = link_builder::song_links(&artist, &title);

    SongCandidate {
        title,
        artist,
        duration_seconds,
        thumbnail_url,
        canonical_url,
        album: opt_str_field(value, "album"),
        year: opt_u32_field(value, "year"),
        genre: opt_str_field(value, "genre"),
        popularity: opt_u32_field(value, "popularity"),
        description: opt_str_field(value, "description"),
    }
}

pub fn normalize_chord_event(value: &Value) -> ChordEvent {
    let time_seconds = f64_field(value, "time_seconds", 0.0).max(0.0);

    let mut duration_seconds = f64_field(value, "duration_seconds", DEFAULT_CHORD_DURATION_SECS);
    if duration_seconds <= 0.0 {
        duration_seconds = DEFAULT_CHORD_DURATION_SECS;
    }

    ChordEvent {
        time_seconds,
        chord_symbol: str_field(value, "chord_symbol", DEFAULT_CHORD_SYMBOL),
        duration_seconds,
        lyric_line: str_field(value, "lyric_line", ""),
        section: str_field(value, "section", DEFAULT_SECTION),
    }
}

fn normalize_section_chord_map(value: &Value) -> Option<BTreeMap<String, Vec<String>>> {
    let map: BTreeMap<String, Vec<String>> = value
        .get("section_chord_map")
        .and_then(|v| v.as_object())
        .map(|object| {
            object
                .iter()
                .filter_map(|(section, chords)| {
                    chords.as_array().map(|items| {
                        let symbols: Vec<String> = items
                            .iter()
                            .filter_map(|item| item.as_str())
                            .map(|s| s.to_string())
                            .collect();
                        (section.clone(), symbols)
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn normalize_alternative_capo(value: &Value) -> Option<AlternativeCapo> {
    let alt = value.get("alternative_capo")?;
    alt.as_object()?;

    Some(AlternativeCapo {
        position: u32_field(alt, "position", 0),
        chords: str_vec_field(alt, "chords"),
    })
}

/// Absent or non-array `chords` normalizes to an empty sequence; the
/// orchestrator decides whether that warrants fallback.
pub fn normalize_chord_analysis(value: &Value, song: SongCandidate) -> ChordAnalysis {
    let chords: Vec<ChordEvent> = value
        .get("chords")
        .and_then(|v| v.as_array())
        .map(|items| items.iter().map(normalize_chord_event).collect())
        .unwrap_or_default();

    ChordAnalysis {
        song,
        chords,
        key: str_field(value, "key", DEFAULT_KEY),
        tempo_bpm: u32_field(value, "tempo_bpm", DEFAULT_TEMPO_BPM),
        difficulty: difficulty_field(value, "difficulty", Difficulty::Beginner),
        capo_position: opt_u32_field(value, "capo_position"),
        tuning: opt_str_field(value, "tuning"),
        strumming_pattern: opt_str_field(value, "strumming_pattern"),
        time_signature: opt_str_field(value, "time_signature"),
        section_chord_map: normalize_section_chord_map(value),
        song_structure: opt_str_vec_field(value, "song_structure"),
        alternative_capo: normalize_alternative_capo(value),
    }
}

/// Step numbers are re-issued sequentially; the model's own numbering is
/// dropped so the sequence is always 1-based and gapless.
pub fn normalize_tutorial_step(value: &Value, index: usize) -> TutorialStep {
    let step_number = (index + 1) as u32;

    TutorialStep {
        step_number,
        title: str_field(value, "title", &format!("Step {}", step_number)),
        description: str_field(value, "description", ""),
        chords: str_vec_field(value, "chords"),
        techniques: str_vec_field(value, "techniques"),
        tips: str_vec_field(value, "tips"),
        practice_minutes: opt_u32_field(value, "practice_minutes"),
        common_mistakes: opt_str_vec_field(value, "common_mistakes"),
    }
}

fn normalize_playing_tips(value: &Value) -> Option<PlayingTips> {
    let tips = value.get("playing_tips")?;
    tips.as_object()?;

    Some(PlayingTips {
        strumming: str_field(tips, "strumming", ""),
        rhythm: str_field(tips, "rhythm", ""),
        transitions: str_field(tips, "transitions", ""),
    })
}

pub fn normalize_tutorial(value: &Value, analysis: &ChordAnalysis) -> Tutorial {
    let steps: Vec<TutorialStep> = value
        .get("steps")
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .enumerate()
                .map(|(index, item)| normalize_tutorial_step(item, index))
                .collect()
        })
        .unwrap_or_default();

    Tutorial {
        overview: str_field(
            value,
            "overview",
            &format!("A step-by-step guide to playing {}.", analysis.song.title),
        ),
        difficulty: difficulty_field(value, "difficulty", analysis.difficulty),
        estimated_minutes: u32_field(value, "estimated_minutes", DEFAULT_TUTORIAL_MINUTES),
        steps,
        practice_notes: str_field(
            value,
            "practice_notes",
            "Practice slowly with a metronome and only speed up once every change is clean.",
        ),
        requirements: opt_str_vec_field(value, "requirements"),
        chord_diagrams: opt_str_map_field(value, "chord_diagrams"),
        playing_tips: normalize_playing_tips(value),
        performance_tips: opt_str_vec_field(value, "performance_tips"),
    }
}
