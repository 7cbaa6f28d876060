use std::sync::Arc;

use chordcoach::enums::completion_error::CompletionError;
use chordcoach::services::completion_client::CompletionClient;
use chordcoach::services::fallback;
use chordcoach::services::orchestrator::Orchestrator;
use chordcoach::structs::config::completion_config::CompletionConfig;
use chordcoach::structs::song_candidate::SongCandidate;

use crate::support::{valid_tutorial_json, PromptKeyedBackend, ScriptedBackend};

fn unconfigured() -> CompletionConfig {
    CompletionConfig {
        api_key_env: None,
        ..CompletionConfig::default()
    }
}

fn orchestrator_with(backend: Arc<dyn chordcoach::traits::chat_backend::ChatBackend>) -> Orchestrator {
    Orchestrator::with_client(CompletionClient::with_backend(backend))
}

#[tokio::test]
async fn search_maps_model_reply_into_candidates() {
    let backend = Arc::new(ScriptedBackend::new(vec![Ok(serde_json::json!({
        "songs": [{
            "title": "Perfect",
            "artist": "Ed Sheeran",
            "duration_seconds": 263,
            "album": "Divide",
            "year": 2017
        }]
    })
    .to_string())]));
    let orchestrator = orchestrator_with(backend);

    let results = orchestrator.search("Perfect Ed Sheeran").await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Perfect");
    assert_eq!(results[0].artist, "Ed Sheeran");
    assert!(results[0].thumbnail_url.contains("Ed%20Sheeran"));
    assert!(results[0].thumbnail_url.contains("Perfect"));
}

#[tokio::test]
async fn search_accepts_a_bare_array_reply() {
    let backend = Arc::new(ScriptedBackend::new(vec![Ok(
        r#"[{"title": "Hallelujah", "artist": "Leonard Cohen"}]"#.to_string(),
    )]));
    let orchestrator = orchestrator_with(backend);

    let results = orchestrator.search("hallelujah").await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].artist, "Leonard Cohen");
}

#[tokio::test(start_paused = true)]
async fn search_falls_back_when_every_attempt_fails() {
    let backend = Arc::new(ScriptedBackend::always_failing());
    let orchestrator = orchestrator_with(backend.clone());

    let results = orchestrator.search("wonderwall").await;

    assert_eq!(backend.call_count(), 3);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Wonderwall");
}

#[tokio::test]
async fn search_without_configuration_never_touches_the_backend() {
    let orchestrator = Orchestrator::new(&unconfigured());
    let results = orchestrator.search("zzz-no-match-xyz").await;

    // Fallback catalog, never empty.
    assert_eq!(results.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn analyze_uses_chord_fallback_but_keeps_model_tutorial() {
    let backend = Arc::new(PromptKeyedBackend {
        chord_response: Err(CompletionError::NetworkError("down".to_string())),
        tutorial_response: Ok(valid_tutorial_json()),
        search_response: Err(CompletionError::ApiError("unused".to_string())),
    });
    let orchestrator = orchestrator_with(backend);

    let song = SongCandidate::new("Wonderwall", "Oasis", 258);
    let result = orchestrator.analyze(&song).await.unwrap();

    // The chord stage exhausted its retries and self-healed.
    assert_eq!(result.analysis, fallback::chord_fallback(&song));

    // The tutorial stage succeeded and reflects the model reply.
    assert_eq!(result.tutorial.overview, "Model-authored tutorial overview");
    assert_eq!(result.tutorial.steps.len(), 2);
    assert_eq!(result.tutorial.estimated_minutes, 40);
}

#[tokio::test]
async fn analyze_normalizes_a_successful_chord_reply() {
    let chord_json = serde_json::json!({
        "key": "G Major",
        "tempo_bpm": 63,
        "difficulty": "Intermediate",
        "capo_position": 1,
        "chords": [
            {"time_seconds": 0, "chord_symbol": "G", "duration_seconds": 4, "section": "verse"},
            {"time_seconds": 4, "chord_symbol": "Em", "duration_seconds": 4, "section": "verse"}
        ]
    })
    .to_string();

    let backend = Arc::new(PromptKeyedBackend {
        chord_response: Ok(chord_json),
        tutorial_response: Ok(valid_tutorial_json()),
        search_response: Err(CompletionError::ApiError("unused".to_string())),
    });
    let orchestrator = orchestrator_with(backend);

    let song = SongCandidate::new("Perfect", "Ed Sheeran", 263);
    let result = orchestrator.analyze(&song).await.unwrap();

    assert_eq!(result.analysis.key, "G Major");
    assert_eq!(result.analysis.capo_position, Some(1));
    assert_eq!(result.analysis.chord_set(), vec!["G", "Em"]);
    assert_eq!(result.analysis.song, song);
}

#[tokio::test]
async fn empty_chord_list_triggers_the_chord_fallback() {
    let backend = Arc::new(PromptKeyedBackend {
        chord_response: Ok(r#"{"key": "D Major", "chords": []}"#.to_string()),
        tutorial_response: Ok(valid_tutorial_json()),
        search_response: Err(CompletionError::ApiError("unused".to_string())),
    });
    let orchestrator = orchestrator_with(backend);

    let song = SongCandidate::new("Some Obscure B-Side", "Nobody", 200);
    let result = orchestrator.analyze(&song).await.unwrap();

    assert_eq!(result.analysis, fallback::chord_fallback(&song));
}

#[tokio::test(start_paused = true)]
async fn analyze_with_nothing_working_still_yields_a_usable_result() {
    let backend = Arc::new(ScriptedBackend::always_failing());
    let orchestrator = orchestrator_with(backend);

    let song = SongCandidate::new("Let It Be", "The Beatles", 243);
    let result = orchestrator.analyze(&song).await.unwrap();

    assert!(!result.analysis.chords.is_empty());
    assert_eq!(result.tutorial.steps.len(), 5);
    assert_eq!(result.tutorial, fallback::tutorial_fallback(&result.analysis));
}
