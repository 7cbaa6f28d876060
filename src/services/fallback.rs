//! Hand-authored substitute data used whenever the completion pipeline cannot
//! produce a usable result. Deterministic: the same inputs always yield the
//! same output, byte for byte.

use once_cell::sync::Lazy;

use crate::config::constants::FALLBACK_RESULT_LIMIT;
use crate::enums::difficulty::Difficulty;
use crate::structs::chord_analysis::ChordAnalysis;
use crate::structs::chord_event::ChordEvent;
use crate::structs::song_candidate::SongCandidate;
use crate::structs::tutorial::{PlayingTips, Tutorial};
use crate::structs::tutorial_step::TutorialStep;

fn catalog_entry(
    title: &str,
    artist: &str,
    duration_seconds: u32,
    album: &str,
    year: u32,
    genre: &str,
    popularity: u32,
) -> SongCandidate {
    let mut song = SongCandidate::new(title, artist, duration_seconds);
    song.album = Some(album.to_string());
    song.year = Some(year);
    song.genre = Some(genre.to_string());
    song.popularity = Some(popularity);
    song
}

static SONG_CATALOG: Lazy<Vec<SongCandidate>> = Lazy::new(|| {
    vec![
        catalog_entry(
            "Wonderwall",
            "Oasis",
            258,
            "(What's the Story) Morning Glory?",
            1995,
            "Rock",
            95,
        ),
        catalog_entry("Perfect", "Ed Sheeran", 263, "Divide", 2017, "Pop", 93),
        catalog_entry("Let It Be", "The Beatles", 243, "Let It Be", 1970, "Rock", 97),
        catalog_entry(
            "Hallelujah",
            "Leonard Cohen",
            274,
            "Various Positions",
            1984,
            "Folk",
            90,
        ),
        catalog_entry(
            "Knockin' on Heaven's Door",
            "Bob Dylan",
            149,
            "Pat Garrett & Billy the Kid",
            1973,
            "Folk",
            88,
        ),
    ]
});

/// Case-insensitive substring match over title, artist and genre. Never
/// returns an empty list: with zero matches the first 3 catalog entries are
/// served unfiltered.
pub fn search_fallback(query: &str) -> Vec<SongCandidate> {
    let needle = query.to_lowercase();

    let matches: Vec<SongCandidate> = SONG_CATALOG
        .iter()
        .filter(|song| {
            song.title.to_lowercase().contains(&needle)
                || song.artist.to_lowercase().contains(&needle)
                || song
                    .genre
                    .as_deref()
                    .map(|g| g.to_lowercase().contains(&needle))
                    .unwrap_or(false)
        })
        .cloned()
        .collect();

    if matches.is_empty() {
        return SONG_CATALOG
            .iter()
            .take(FALLBACK_RESULT_LIMIT)
            .cloned()
            .collect();
    }

    matches
}

fn event(time: f64, chord: &str, duration: f64, section: &str) -> ChordEvent {
    ChordEvent {
        time_seconds: time,
        chord_symbol: chord.to_string(),
        duration_seconds: duration,
        lyric_line: String::new(),
        section: section.to_string(),
    }
}

/// Repeats a chord loop over verse and chorus sections until `total` seconds
/// are covered, at `bar` seconds per chord.
fn looped_progression(loop_chords: &[&str], bar: f64, total: f64) -> Vec<ChordEvent> {
    let mut events = Vec::new();
    let mut time = 0.0;
    let mut index = 0usize;

    while time < total {
        let section = if (time / total) < 0.5 { "verse" } else { "chorus" };
        events.push(event(time, loop_chords[index % loop_chords.len()], bar, section));
        time += bar;
        index += 1;
    }

    events
}

/// Deterministic substitute analysis, keyed by title keyword. Bespoke
/// progressions exist for a handful of well-known songs; everything else gets
/// a generic C-Major loop.
pub fn chord_fallback(song: &SongCandidate) -> ChordAnalysis {
    let title = song.title.to_lowercase();
    let total = f64::from(song.duration_seconds);

    let (chords, key, tempo_bpm, capo_position, strumming) = if title.contains("wonderwall") {
        (
            looped_progression(&["Em7", "G", "Dsus4", "A7sus4"], 2.0, total),
            "F# Minor",
            87,
            Some(2),
            "D D U U D U",
        )
    } else if title.contains("perfect") {
        (
            looped_progression(&["G", "Em", "C", "D"], 4.0, total),
            "G Major",
            63,
            Some(1),
            "D DU UDU",
        )
    } else if title.contains("let it be") {
        (
            looped_progression(&["C", "G", "Am", "F"], 2.0, total),
            "C Major",
            73,
            None,
            "D D D D",
        )
    } else {
        (
            looped_progression(&["C", "G", "Am", "F"], 4.0, total),
            "C Major",
            120,
            None,
            "D DU UDU",
        )
    };

    ChordAnalysis {
        song: song.clone(),
        chords,
        key: key.to_string(),
        tempo_bpm,
        difficulty: Difficulty::Beginner,
        capo_position,
        tuning: Some("Standard".to_string()),
        strumming_pattern: Some(strumming.to_string()),
        time_signature: Some("4/4".to_string()),
        section_chord_map: None,
        song_structure: Some(vec![
            "intro".to_string(),
            "verse".to_string(),
            "chorus".to_string(),
            "verse".to_string(),
            "chorus".to_string(),
            "outro".to_string(),
        ]),
        alternative_capo: None,
    }
}

/// Generic five-step tutorial built from the analysis chord set.
pub fn tutorial_fallback(analysis: &ChordAnalysis) -> Tutorial {
    let chord_set = analysis.chord_set();
    let chord_list = chord_set.join(", ");

    let steps = vec![
        TutorialStep {
            step_number: 1,
            title: "Learn the chord shapes".to_string(),
            description: format!(
                "Fret each chord in the song ({}) one at a time and strum once, checking that every string rings out.",
                chord_list
            ),
            chords: chord_set.clone(),
            techniques: vec!["fretting".to_string()],
            tips: vec!["Keep your thumb behind the neck for cleaner reach.".to_string()],
            practice_minutes: Some(10),
            common_mistakes: Some(vec!["Pressing too lightly and muting strings".to_string()]),
        },
        TutorialStep {
            step_number: 2,
            title: "Practice the transitions".to_string(),
            description: "Move between neighbouring chords in the progression without strumming until the switch feels automatic.".to_string(),
            chords: chord_set.clone(),
            techniques: vec!["chord changes".to_string()],
            tips: vec!["Look for fingers that can stay anchored between shapes.".to_string()],
            practice_minutes: Some(10),
            common_mistakes: Some(vec!["Lifting all fingers at once".to_string()]),
        },
        TutorialStep {
            step_number: 3,
            title: "Add the strumming pattern".to_string(),
            description: format!(
                "Play the pattern {} on a muted chord, then on one chord, at half the song tempo.",
                analysis.strumming_pattern.as_deref().unwrap_or("D DU UDU")
            ),
            chords: chord_set.first().cloned().into_iter().collect(),
            techniques: vec!["strumming".to_string()],
            tips: vec!["Keep your wrist loose and your arm moving constantly.".to_string()],
            practice_minutes: Some(10),
            common_mistakes: Some(vec!["Stopping the strumming hand during changes".to_string()]),
        },
        TutorialStep {
            step_number: 4,
            title: "Play the first section".to_string(),
            description: "Combine chords and strumming over the opening section of the song at a slow, even tempo.".to_string(),
            chords: chord_set.clone(),
            techniques: vec!["strumming".to_string(), "chord changes".to_string()],
            tips: vec!["A metronome at half tempo exposes rushed changes.".to_string()],
            practice_minutes: Some(10),
            common_mistakes: None,
        },
        TutorialStep {
            step_number: 5,
            title: "Play the full song".to_string(),
            description: format!(
                "Run the complete progression in {} at {} BPM, gradually working up to the recording.",
                analysis.key, analysis.tempo_bpm
            ),
            chords: chord_set.clone(),
            techniques: vec!["endurance".to_string()],
            tips: vec!["Play along with the original track once comfortable.".to_string()],
            practice_minutes: Some(15),
            common_mistakes: None,
        },
    ];

    Tutorial {
        overview: format!(
            "Learn {} by {} with a simple, progressive practice plan covering the chords {}.",
            analysis.song.title, analysis.song.artist, chord_list
        ),
        difficulty: analysis.difficulty,
        estimated_minutes: 55,
        steps,
        practice_notes: "Short daily sessions beat one long weekly session; stop while your hands are still fresh.".to_string(),
        requirements: Some(vec!["Acoustic or electric guitar".to_string()]),
        chord_diagrams: None,
        playing_tips: Some(PlayingTips {
            strumming: "Start with downstrokes only, then layer in the full pattern.".to_string(),
            rhythm: "Count out loud until the pattern sits naturally.".to_string(),
            transitions: "Slow is smooth; smooth becomes fast.".to_string(),
        }),
        performance_tips: None,
    }
}
