//! OpenAI client configuration.

use crate::config::SummarySettings;
use crate::error::Result;
use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Create an OpenAI client from summary settings.
///
/// The API key is read from `OPENAI_API_KEY`. `api_base` redirects requests to
/// any OpenAI-compatible endpoint.
pub fn create_client(settings: &SummarySettings) -> Result<Client<OpenAIConfig>> {
    let mut config = OpenAIConfig::default();
    if let Some(api_base) = &settings.api_base {
        config = config.with_api_base(api_base);
    }

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()?;

    Ok(Client::with_config(config).with_http_client(http_client))
}

/// Check whether an OpenAI API key is available.
pub fn is_api_key_configured() -> bool {
    std::env::var("OPENAI_API_KEY").is_ok_and(|key| !key.trim().is_empty())
}
