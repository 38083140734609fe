//! Transcript command - fetch and format captions without summarizing.

use super::summarize::terminal_width;
use crate::captions::YoutubeSource;
use crate::cli::{wrap_paragraphs, Output};
use crate::config::Settings;
use crate::pipeline::fetch_transcript;
use anyhow::Result;

/// Run the transcript command.
pub async fn run_transcript(
    url: &str,
    output: Option<String>,
    json: bool,
    settings: Settings,
) -> Result<()> {
    let source = YoutubeSource::with_settings(&settings.youtube)?;

    let spinner = Output::spinner("Fetching captions...");
    let result = fetch_transcript(&source, url, &settings.youtube.language).await;
    spinner.finish_and_clear();

    let video = match result {
        Ok(video) => video,
        Err(e) => {
            Output::error(&format!("{}", e));
            return Err(e.into());
        }
    };

    let content = if json {
        serde_json::to_string_pretty(&video.fragments)?
    } else {
        video.transcript
    };

    match output {
        Some(path) => {
            std::fs::write(&path, &content)?;
            Output::success(&format!(
                "Wrote {} caption fragments for {} to {}",
                video.fragments.len(),
                video.video_id,
                path
            ));
        }
        None if json => println!("{}", content),
        None => println!("{}", wrap_paragraphs(&content, terminal_width())),
    }

    Ok(())
}
