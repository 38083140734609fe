//! OpenAI chat-completion summarizer.

use super::{trim_transcript, Summarizer, EMPTY_SUMMARY};
use crate::config::{Prompts, SummarySettings};
use crate::error::{Result, TldwError};
use crate::openai::{create_client, is_api_key_configured};
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Summarizer backed by an OpenAI-compatible chat completion API.
pub struct OpenAISummarizer {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    settings: SummarySettings,
    prompts: Prompts,
}

impl OpenAISummarizer {
    /// Create a summarizer with default prompts.
    pub fn new(settings: SummarySettings) -> Result<Self> {
        Ok(Self {
            client: create_client(&settings)?,
            settings,
            prompts: Prompts::default(),
        })
    }

    /// Set custom prompts (with user-defined variables).
    pub fn with_prompts(mut self, prompts: Prompts) -> Self {
        self.prompts = prompts;
        self
    }

    /// Override the completion model.
    pub fn with_model(mut self, model: &str) -> Self {
        self.settings.model = model.to_string();
        self
    }

    fn build_messages(&self, transcript: &str) -> Result<Vec<ChatCompletionRequestMessage>> {
        let trimmed = trim_transcript(transcript, self.settings.max_transcript_chars);

        let mut vars = HashMap::new();
        vars.insert("transcript".to_string(), trimmed);
        let user_prompt = self
            .prompts
            .render_with_custom(&self.prompts.summary.user, &vars);
        let system_prompt = self
            .prompts
            .render_with_custom(&self.prompts.summary.system, &HashMap::new());

        Ok(vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system_prompt)
                .build()
                .map_err(|e| TldwError::Summary(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(user_prompt)
                .build()
                .map_err(|e| TldwError::Summary(e.to_string()))?
                .into(),
        ])
    }
}

#[async_trait]
impl Summarizer for OpenAISummarizer {
    #[instrument(skip(self, transcript))]
    async fn summarize(&self, transcript: &str) -> Result<String> {
        if !self.is_configured() {
            return Err(TldwError::Summary(
                "Failed to generate summary: OpenAI API key is not configured".to_string(),
            ));
        }

        info!(
            "Requesting summary from {} for {} chars of transcript",
            self.settings.model,
            transcript.len()
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.settings.model)
            .messages(self.build_messages(transcript)?)
            .temperature(self.settings.temperature)
            .max_completion_tokens(self.settings.max_tokens)
            .build()
            .map_err(|e| TldwError::Summary(format!("Failed to generate summary: {}", e)))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            TldwError::Summary(format!("Failed to generate summary: {}", e))
        })?;

        let summary = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| EMPTY_SUMMARY.to_string());

        debug!("Generated summary of {} chars", summary.len());

        Ok(summary)
    }

    fn is_configured(&self) -> bool {
        is_api_key_configured()
    }
}
