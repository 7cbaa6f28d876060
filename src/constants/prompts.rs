pub const SYSTEM_PROMPT: &str = r#"
You are a guitar teaching assistant with deep knowledge of popular music, chord
progressions and practice pedagogy.

CRITICAL: You MUST respond with valid JSON only. No prose before or after the
JSON, no markdown code fences, no comments inside the JSON.
"#;

pub const SEARCH_PROMPT_TEMPLATE: &str = r#"
Find the top 5 well-known songs matching this search: "{query}"

Prefer widely recognized recordings over covers or remixes.

Respond in valid JSON with this exact structure:

{
  "songs": [
    {
      "title": "Wonderwall",
      "artist": "Oasis",
      "duration_seconds": 258,
      "album": "(What's the Story) Morning Glory?",
      "year": 1995,
      "genre": "Rock",
      "popularity": 95,
      "description": "Britpop anthem built on a capoed chord loop"
    }
  ]
}

RULES:
1. At most 5 songs, best match first
2. duration_seconds is the studio recording length in whole seconds
3. Omit any field you are not confident about rather than guessing
"#;

pub const CHORD_PROMPT_TEMPLATE: &str = r#"
Produce an accurate guitar chord analysis of "{title}" by {artist}
(approximately {duration} seconds long).

Respond in valid JSON with this exact structure:

{
  "key": "F# Minor",
  "tempo_bpm": 87,
  "difficulty": "Beginner",
  "capo_position": 2,
  "tuning": "Standard",
  "strumming_pattern": "D D U U D U",
  "time_signature": "4/4",
  "chords": [
    {
      "time_seconds": 0,
      "chord_symbol": "Em7",
      "duration_seconds": 2,
      "lyric_line": "Today is gonna be the day",
      "section": "verse"
    }
  ],
  "section_chord_map": {
    "verse": ["Em7", "G", "Dsus4", "A7sus4"],
    "chorus": ["C", "Em7", "G"]
  },
  "song_structure": ["intro", "verse", "chorus", "verse", "chorus", "outro"],
  "alternative_capo": {
    "position": 0,
    "chords": ["F#m7", "A", "Esus4", "B7sus4"]
  }
}

RULES:
1. chords must cover the whole song in ascending time_seconds order
2. Use the chord shapes a guitarist would actually play (with capo if common)
3. difficulty is one of: Beginner, Intermediate, Advanced
4. Every chord event needs time_seconds, chord_symbol, duration_seconds and section
"#;

pub const TUTORIAL_PROMPT_TEMPLATE: &str = r#"
Create a step-by-step guitar tutorial for "{title}" by {artist}.

The chord analysis has already been computed; reference exactly these chords:
{chords}
Key: {key}, tempo: {tempo} BPM, difficulty: {difficulty}.

Respond in valid JSON with this exact structure:

{
  "overview": "What the student will achieve and why this song suits them",
  "difficulty": "Beginner",
  "estimated_minutes": 45,
  "requirements": ["Acoustic or electric guitar", "Capo"],
  "steps": [
    {
      "step_number": 1,
      "title": "Learn the chord shapes",
      "description": "Fret each chord slowly and check every string rings out",
      "chords": ["Em7", "G"],
      "techniques": ["fretting"],
      "tips": ["Keep your thumb behind the neck"],
      "practice_minutes": 10,
      "common_mistakes": ["Muting the high E string"]
    }
  ],
  "practice_notes": "How to structure practice sessions for this song",
  "chord_diagrams": {
    "Em7": "e|-3-\nB|-3-\nG|-0-\nD|-2-\nA|-2-\nE|-0-"
  },
  "playing_tips": {
    "strumming": "...",
    "rhythm": "...",
    "transitions": "..."
  },
  "performance_tips": ["..."]
}

RULES:
1. Between 5 and 7 progressive steps, each building on the previous one
2. Only reference chords from the list above
3. step_number starts at 1 and increases by 1
"#;
