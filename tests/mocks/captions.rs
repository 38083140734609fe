use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tldw::captions::{CaptionFragment, CaptionSource};
use tldw::{Result, TldwError};

#[derive(Clone)]
pub struct MockCaptions {
    pub fragments: Vec<CaptionFragment>,
    pub title: String,
    pub fail_with: Option<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockCaptions {
    pub fn new(texts: &[&str]) -> Self {
        let fragments = texts
            .iter()
            .enumerate()
            .map(|(i, text)| CaptionFragment::new(*text, i as f64 * 3.0, 3.0))
            .collect();

        Self {
            fragments,
            title: "Mock Video".to_string(),
            fail_with: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new(&[])
        }
    }
}

#[async_trait]
impl CaptionSource for MockCaptions {
    async fn fetch_captions(&self, video_id: &str, _language: &str) -> Result<Vec<CaptionFragment>> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if let Some(msg) = &self.fail_with {
            return Err(TldwError::Captions(msg.clone()));
        }
        Ok(self.fragments.clone())
    }

    async fn fetch_title(&self, _video_id: &str) -> String {
        self.title.clone()
    }
}
