use crate::config::constants::{CHORD_MAX_TOKENS, SEARCH_MAX_TOKENS, SEARCH_RESULT_LIMIT, TUTORIAL_MAX_TOKENS};
use crate::errors::CoachResult;
use crate::helpers::prompt_builder;
use crate::services::completion_client::CompletionClient;
use crate::services::fallback;
use crate::services::normalizer;
use crate::structs::chord_analysis::ChordAnalysis;
use crate::structs::config::completion_config::CompletionConfig;
use crate::structs::full_result::FullResult;
use crate::structs::song_candidate::SongCandidate;
use crate::structs::tutorial::Tutorial;

/// Sequences prompt building, the completion call and normalization into the
/// two public operations, substituting fallback data at every stage boundary.
pub struct Orchestrator {
    client: Option<CompletionClient>,
}

impl Orchestrator {
    /// Configuration is checked once, here. Without a usable API key every
    /// operation short-circuits to fallback data and never touches the network.
    pub fn new(config: &CompletionConfig) -> Self {
        if config.is_configured() {
            Self {
                client: Some(CompletionClient::new(config)),
            }
        } else {
            log::warn!("⚠️ Completion endpoint not configured; serving built-in fallback data");
            Self { client: None }
        }
    }

    pub fn with_client(client: CompletionClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Song search. Never fails: any error in the pipeline is logged and
    /// replaced by the fallback catalog.
    pub async fn search(&self, query: &str) -> Vec<SongCandidate> {
        let Some(client) = &self.client else {
            return fallback::search_fallback(query);
        };

        let prompt = prompt_builder::search_prompt(query);

        match client.call(&prompt, SEARCH_MAX_TOKENS).await {
            Ok(value) => {
                // Accept both a bare array and the documented {"songs": [...]}.
                let items = value
                    .get("songs")
                    .and_then(|s| s.as_array())
                    .or_else(|| value.as_array())
                    .cloned()
                    .unwrap_or_default();

                let candidates: Vec<SongCandidate> = items
                    .iter()
                    .take(SEARCH_RESULT_LIMIT)
                    .map(normalizer::normalize_song_candidate)
                    .collect();

                if candidates.is_empty() {
                    log::warn!("⚠️ Search reply contained no songs; using fallback catalog");
                    return fallback::search_fallback(query);
                }

                candidates
            }
            Err(e) => {
                log::error!("❌ Song search failed: {}", e);
                fallback::search_fallback(query)
            }
        }
    }

    /// Full analysis: chord progression first, then the tutorial generated
    /// from it. Each stage self-heals with its own fallback.
    pub async fn analyze(&self, song: &SongCandidate) -> CoachResult<FullResult> {
        log::info!("🎸 Analyzing \"{}\" by {}", song.title, song.artist);

        let analysis = self.chord_stage(song).await;
        let tutorial = self.tutorial_stage(song, &analysis).await;

        Ok(FullResult { analysis, tutorial })
    }

    async fn chord_stage(&self, song: &SongCandidate) -> ChordAnalysis {
        let Some(client) = &self.client else {
            return fallback::chord_fallback(song);
        };

        let prompt = prompt_builder::chord_prompt(song);

        match client.call(&prompt, CHORD_MAX_TOKENS).await {
            Ok(value) => {
                let analysis = normalizer::normalize_chord_analysis(&value, song.clone());
                if analysis.chords.is_empty() {
                    log::warn!("⚠️ Chord reply contained no events; using fallback progression");
                    return fallback::chord_fallback(song);
                }
                analysis
            }
            Err(e) => {
                log::error!("❌ Chord analysis failed: {}", e);
                fallback::chord_fallback(song)
            }
        }
    }

    async fn tutorial_stage(&self, song: &SongCandidate, analysis: &ChordAnalysis) -> Tutorial {
        let Some(client) = &self.client else {
            return fallback::tutorial_fallback(analysis);
        };

        let prompt = match prompt_builder::tutorial_prompt(song, analysis) {
            Ok(prompt) => prompt,
            Err(e) => {
                log::error!("❌ Tutorial prompt build failed: {}", e);
                return fallback::tutorial_fallback(analysis);
            }
        };

        match client.call(&prompt, TUTORIAL_MAX_TOKENS).await {
            Ok(value) => {
                let tutorial = normalizer::normalize_tutorial(&value, analysis);
                if tutorial.steps.is_empty() {
                    log::warn!("⚠️ Tutorial reply contained no steps; using fallback tutorial");
                    return fallback::tutorial_fallback(analysis);
                }
                tutorial
            }
            Err(e) => {
                log::error!("❌ Tutorial generation failed: {}", e);
                fallback::tutorial_fallback(analysis)
            }
        }
    }
}
