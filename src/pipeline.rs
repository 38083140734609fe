//! Summarization pipeline for tldw.
//!
//! Coordinates the process from video URL to formatted transcript and summary.

use crate::captions::{extract_video_id, CaptionFragment, CaptionSource, YoutubeSource};
use crate::config::{Prompts, Settings};
use crate::error::{Result, TldwError};
use crate::summary::{OpenAISummarizer, Summarizer};
use crate::transcript::format_transcript;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

/// Captions of one video, raw and formatted.
#[derive(Debug, Clone)]
pub struct VideoTranscript {
    pub video_id: String,
    pub fragments: Vec<CaptionFragment>,
    pub transcript: String,
}

/// Result of summarizing a video.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub video_id: String,
    pub video_title: String,
    pub summary: String,
    pub transcript: String,
}

/// Fetch and format the captions of a video from any caption source.
#[instrument(skip(captions))]
pub async fn fetch_transcript(
    captions: &dyn CaptionSource,
    input: &str,
    language: &str,
) -> Result<VideoTranscript> {
    let video_id = extract_video_id(input)
        .ok_or_else(|| TldwError::InvalidInput("Invalid YouTube URL".to_string()))?;

    let fragments = captions
        .fetch_captions(&video_id, language)
        .await
        .map_err(|e| match e {
            TldwError::Captions(_) | TldwError::CaptionsNotFound(_) => e,
            other => TldwError::Captions(other.to_string()),
        })?;

    if fragments.is_empty() {
        return Err(TldwError::CaptionsNotFound(video_id));
    }

    info!("Fetched {} caption fragments for {}", fragments.len(), video_id);

    let transcript = format_transcript(&fragments);

    Ok(VideoTranscript {
        video_id,
        fragments,
        transcript,
    })
}

/// The main pipeline: caption source, formatter, summarizer.
pub struct Pipeline {
    captions: Arc<dyn CaptionSource>,
    summarizer: Arc<dyn Summarizer>,
    language: String,
}

impl Pipeline {
    /// Create a pipeline backed by YouTube and OpenAI.
    pub fn new(settings: &Settings) -> Result<Self> {
        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;

        let captions = Arc::new(YoutubeSource::with_settings(&settings.youtube)?);
        let summarizer =
            Arc::new(OpenAISummarizer::new(settings.summary.clone())?.with_prompts(prompts));

        Ok(Self::with_components(
            captions,
            summarizer,
            &settings.youtube.language,
        ))
    }

    /// Create a pipeline with custom components.
    pub fn with_components(
        captions: Arc<dyn CaptionSource>,
        summarizer: Arc<dyn Summarizer>,
        language: &str,
    ) -> Self {
        Self {
            captions,
            summarizer,
            language: language.to_string(),
        }
    }

    /// Whether the summarizer has its credentials.
    pub fn is_configured(&self) -> bool {
        self.summarizer.is_configured()
    }

    /// Fetch and format the captions of a video.
    pub async fn transcript(&self, input: &str) -> Result<VideoTranscript> {
        fetch_transcript(self.captions.as_ref(), input, &self.language).await
    }

    /// Fetch captions, title, and an LLM summary for a video.
    #[instrument(skip(self))]
    pub async fn summarize(&self, input: &str) -> Result<VideoSummary> {
        let VideoTranscript {
            video_id,
            transcript,
            ..
        } = self.transcript(input).await?;

        let video_title = self.captions.fetch_title(&video_id).await;
        let summary = self.summarizer.summarize(&transcript).await?;

        info!("Summarized {} ({})", video_title, video_id);

        Ok(VideoSummary {
            video_id,
            video_title,
            summary,
            transcript,
        })
    }
}
