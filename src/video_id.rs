use once_cell::sync::Lazy;
use regex::Regex;

// watch?v=, youtu.be/, /v/, /e/, /embed/ and /<segment>/<anything>/ shapes
static VIDEO_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
    )
    .expect("Failed to compile video id regex")
});

/// Extract the 11-character video identifier from a YouTube URL.
///
/// Returns `None` for anything that is not one of the recognized YouTube URL shapes.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_REGEX
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Player URL embedded next to the summary.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", video_id)
}
