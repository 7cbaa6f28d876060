use serde::{Deserialize, Serialize};

/// One search hit. `thumbnail_url` and `canonical_url` are synthesized from
/// artist + title, never taken from the model reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongCandidate {
    pub title: String,
    pub artist: String,
    pub duration_seconds: u32,
    pub thumbnail_url: String,
    pub canonical_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SongCandidate {
    /// Minimal candidate with synthesized links, used by the CLI when the
    /// caller already knows which song it wants analyzed.
    pub fn new(title: &str, artist: &str, duration_seconds: u32) -> Self {
        let (thumbnail_url, canonical_url) = crate::helpers::link_builder::song_links(artist, title);
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            duration_seconds,
            thumbnail_url,
            canonical_url,
            album: None,
            year: None,
            genre: None,
            popularity: None,
            description: None,
        }
    }
}
