//! YouTube caption source implementation.

use super::{parse_timedtext, CaptionFragment, CaptionSource};
use crate::config::YoutubeSettings;
use crate::error::{Result, TldwError};
use crate::transcript::normalize_fragment;
use async_trait::async_trait;
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Title reported when the watch page cannot be read.
pub const FALLBACK_TITLE: &str = "YouTube Video";

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";
const CAPTION_TRACKS_MARKER: &str = "\"captionTracks\":";

/// A caption track advertised in the watch page player response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    /// Timedtext URL for this track.
    pub base_url: String,
    /// Track id: ".en" for uploaded captions, "a.en" for auto-generated ones.
    #[serde(default)]
    pub vss_id: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
}

/// Pick the track for a language: uploaded captions first, then
/// auto-generated, then any track whose id mentions the language.
pub fn select_track<'a>(tracks: &'a [CaptionTrack], language: &str) -> Option<&'a CaptionTrack> {
    let uploaded = format!(".{}", language);
    let generated = format!("a.{}", language);

    tracks
        .iter()
        .find(|t| t.vss() == uploaded)
        .or_else(|| tracks.iter().find(|t| t.vss() == generated))
        .or_else(|| tracks.iter().find(|t| t.vss().contains(&uploaded)))
}

impl CaptionTrack {
    fn vss(&self) -> &str {
        self.vss_id.as_deref().unwrap_or_default()
    }
}

/// Parse the caption track list out of a watch page.
fn find_caption_tracks(page: &str, video_id: &str) -> Result<Vec<CaptionTrack>> {
    let Some(pos) = page.find(CAPTION_TRACKS_MARKER) else {
        if page.contains("class=\"g-recaptcha\"") {
            return Err(TldwError::Captions(
                "YouTube is receiving too many requests from this machine".to_string(),
            ));
        }
        if !page.contains("\"playabilityStatus\":") {
            return Err(TldwError::Captions(format!(
                "Video {} is unavailable",
                video_id
            )));
        }
        return Err(TldwError::Captions(format!(
            "Could not find captions for video: {}",
            video_id
        )));
    };

    let rest = &page[pos + CAPTION_TRACKS_MARKER.len()..];
    serde_json::Deserializer::from_str(rest)
        .into_iter::<Vec<CaptionTrack>>()
        .next()
        .unwrap_or_else(|| Ok(Vec::new()))
        .map_err(|e| TldwError::Captions(format!("Failed to parse caption tracks: {}", e)))
}

/// YouTube caption and title source backed by the public watch page.
pub struct YoutubeSource {
    client: reqwest::Client,
    title_regex: Regex,
    og_title_regex: Regex,
}

impl YoutubeSource {
    /// Create a source with default settings.
    pub fn new() -> Result<Self> {
        Self::with_settings(&YoutubeSettings::default())
    }

    /// Create a source with a custom timeout and user agent.
    pub fn with_settings(settings: &YoutubeSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .user_agent(settings.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            title_regex: Regex::new(r"<title>(.*?)</title>").expect("Invalid regex"),
            og_title_regex: Regex::new(r#"<meta property="og:title" content="(.*?)""#)
                .expect("Invalid regex"),
        })
    }

    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TldwError::Captions(format!(
                "Request to {} failed with status {}",
                url, status
            )));
        }
        Ok(response.text().await?)
    }

    async fn fetch_watch_page(&self, video_id: &str) -> Result<String> {
        self.fetch_text(&format!("{}{}", WATCH_URL, video_id)).await
    }

    /// Pull the video title out of a watch page.
    pub fn extract_title(&self, page: &str) -> Option<String> {
        let from_title = self
            .title_regex
            .captures(page)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
            .filter(|t| !t.is_empty())
            .map(|t| t.replacen(" - YouTube", "", 1));

        let title = from_title.or_else(|| {
            self.og_title_regex
                .captures(page)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
                .filter(|t| !t.is_empty())
        })?;

        let title = normalize_fragment(&title);
        (!title.is_empty()).then_some(title)
    }
}

#[async_trait]
impl CaptionSource for YoutubeSource {
    #[instrument(skip(self))]
    async fn fetch_captions(&self, video_id: &str, language: &str) -> Result<Vec<CaptionFragment>> {
        let page = self.fetch_watch_page(video_id).await.map_err(|e| match e {
            TldwError::Http(e) => TldwError::Captions(format!("Failed to fetch video page: {}", e)),
            other => other,
        })?;

        let tracks = find_caption_tracks(&page, video_id)?;
        debug!("Found {} caption tracks", tracks.len());

        let track = select_track(&tracks, language).ok_or_else(|| {
            TldwError::Captions(format!(
                "Could not find {} captions for {}",
                language, video_id
            ))
        })?;
        debug!(
            "Using caption track {:?} ({:?})",
            track.vss_id, track.kind
        );

        let xml = self.fetch_text(&track.base_url).await.map_err(|e| match e {
            TldwError::Http(e) => TldwError::Captions(format!("Failed to fetch captions: {}", e)),
            other => other,
        })?;

        Ok(parse_timedtext(&xml))
    }

    #[instrument(skip(self))]
    async fn fetch_title(&self, video_id: &str) -> String {
        match self.fetch_watch_page(video_id).await {
            Ok(page) => self
                .extract_title(&page)
                .unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            Err(e) => {
                warn!("Failed to fetch title for {}: {}", video_id, e);
                FALLBACK_TITLE.to_string()
            }
        }
    }
}
