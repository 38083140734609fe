//! Summarize command implementation.

use crate::captions::YoutubeSource;
use crate::cli::preflight::{self, Operation};
use crate::cli::{wrap_paragraphs, Output};
use crate::config::{Prompts, Settings};
use crate::pipeline::Pipeline;
use crate::summary::OpenAISummarizer;
use anyhow::Result;
use console::Term;
use std::sync::Arc;

/// Run the summarize command.
pub async fn run_summarize(
    url: &str,
    model: Option<String>,
    show_transcript: bool,
    json: bool,
    settings: Settings,
) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Summarize) {
        Output::error(&format!("{}", e));
        return Err(e.into());
    }

    let prompts = Prompts::load(
        settings.prompts.custom_dir.as_deref(),
        Some(&settings.prompts.variables),
    )?;

    let mut summarizer = OpenAISummarizer::new(settings.summary.clone())?.with_prompts(prompts);
    if let Some(model) = &model {
        summarizer = summarizer.with_model(model);
    }

    let pipeline = Pipeline::with_components(
        Arc::new(YoutubeSource::with_settings(&settings.youtube)?),
        Arc::new(summarizer),
        &settings.youtube.language,
    );

    let spinner = Output::spinner("Fetching captions and summarizing...");
    let result = pipeline.summarize(url).await;
    spinner.finish_and_clear();

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            Output::error(&format!("{}", e));
            return Err(e.into());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let width = terminal_width();

    Output::header(&result.video_title);
    Output::kv("Video", &format!("https://www.youtube.com/watch?v={}", result.video_id));
    println!();
    println!("{}", wrap_paragraphs(&result.summary, width));

    if show_transcript {
        Output::header("Transcript");
        println!();
        println!("{}", wrap_paragraphs(&result.transcript, width));
    }

    Ok(())
}

pub(super) fn terminal_width() -> usize {
    let (_, cols) = Term::stdout().size();
    (cols as usize).clamp(40, 100)
}
