//! Caption source abstraction for tldw.
//!
//! Provides the caption fragment model, a trait for fetching captions and
//! titles, and YouTube URL parsing.

mod timedtext;
mod youtube;

pub use timedtext::parse_timedtext;
pub use youtube::{select_track, CaptionTrack, YoutubeSource, FALLBACK_TITLE};

use crate::error::Result;
use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// One timestamped snippet of caption text, as published by the video host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionFragment {
    /// Raw caption text; may carry HTML entities and stray whitespace.
    pub text: String,
    /// Offset from the start of the video, in seconds.
    pub start: f64,
    /// How long the fragment is displayed, in seconds.
    #[serde(alias = "dur")]
    pub duration: f64,
}

impl CaptionFragment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// Trait for caption providers.
#[async_trait]
pub trait CaptionSource: Send + Sync {
    /// Fetch the ordered caption fragments of a video in the given language.
    async fn fetch_captions(&self, video_id: &str, language: &str) -> Result<Vec<CaptionFragment>>;

    /// Look up the video title. Falls back to a generic title instead of failing.
    async fn fetch_title(&self, video_id: &str) -> String;
}

// Greedy prefix: the last URL marker in the input wins.
static VIDEO_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*").expect("Invalid regex")
});

static BARE_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("Invalid regex"));

/// Length of every YouTube video id.
const VIDEO_ID_LEN: usize = 11;

/// Extract the video id from a YouTube URL or a bare 11-character id.
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    if let Some(caps) = VIDEO_URL_REGEX.captures(input) {
        let id = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        return (id.len() == VIDEO_ID_LEN).then(|| id.to_string());
    }

    BARE_ID_REGEX
        .is_match(input)
        .then(|| input.to_string())
}
