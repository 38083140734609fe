use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tldw::summary::Summarizer;
use tldw::{Result, TldwError};

#[derive(Clone)]
pub struct MockSummarizer {
    pub summary: String,
    pub configured: bool,
    pub fail_with: Option<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockSummarizer {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            configured: true,
            fail_with: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new("")
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new("")
        }
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, transcript: &str) -> Result<String> {
        self.calls.lock().unwrap().push(transcript.to_string());
        if let Some(msg) = &self.fail_with {
            return Err(TldwError::Summary(msg.clone()));
        }
        Ok(self.summary.clone())
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}
