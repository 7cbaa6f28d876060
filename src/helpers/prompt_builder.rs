use crate::constants::prompts::{
    CHORD_PROMPT_TEMPLATE, SEARCH_PROMPT_TEMPLATE, TUTORIAL_PROMPT_TEMPLATE,
};
use crate::errors::{CoachError, CoachResult};
use crate::structs::chord_analysis::ChordAnalysis;
use crate::structs::song_candidate::SongCandidate;

/// Input strings are embedded verbatim; no sanitizing or validation here.
pub fn search_prompt(query: &str) -> String {
    SEARCH_PROMPT_TEMPLATE.replace("{query}", query)
}

pub fn chord_prompt(song: &SongCandidate) -> String {
    CHORD_PROMPT_TEMPLATE
        .replace("{title}", &song.title)
        .replace("{artist}", &song.artist)
        .replace("{duration}", &song.duration_seconds.to_string())
}

/// The tutorial prompt embeds the already-computed chord set as JSON, so this
/// is the one builder that can fail.
pub fn tutorial_prompt(song: &SongCandidate, analysis: &ChordAnalysis) -> CoachResult<String> {
    let chords = serde_json::to_string(&analysis.chord_set())
        .map_err(|e| CoachError::AnalysisFailed(format!("could not encode chord set: {}", e)))?;

    Ok(TUTORIAL_PROMPT_TEMPLATE
        .replace("{title}", &song.title)
        .replace("{artist}", &song.artist)
        .replace("{chords}", &chords)
        .replace("{key}", &analysis.key)
        .replace("{tempo}", &analysis.tempo_bpm.to_string())
        .replace("{difficulty}", &analysis.difficulty.to_string()))
}
