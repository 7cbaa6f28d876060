/// Thumbnail and canonical links are synthesized deterministically from
/// artist + title; the model never supplies them.
pub fn song_links(artist: &str, title: &str) -> (String, String) {
    let label = format!("{} - {}", artist, title);
    let encoded_label = urlencoding::encode(&label);

    let query = format!("{} {}", artist, title);
    let encoded_query = urlencoding::encode(&query);

    let thumbnail_url = format!("https://placehold.co/480x360?text={}", encoded_label);
    let canonical_url = format!(
        "https://www.youtube.com/results?search_query={}",
        encoded_query
    );

    (thumbnail_url, canonical_url)
}
