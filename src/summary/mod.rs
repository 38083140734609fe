//! Transcript summarization.

mod openai;

pub use openai::OpenAISummarizer;

use crate::error::Result;
use async_trait::async_trait;

/// Marker appended to transcripts cut to fit the prompt.
pub const TRIMMED_MARKER: &str = "...[transcript trimmed due to length]";

/// Text returned when the model answers without content.
pub const EMPTY_SUMMARY: &str = "Summary not available due to API response issue";

/// Trait for summarization services.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize a formatted transcript.
    async fn summarize(&self, transcript: &str) -> Result<String>;

    /// Whether the service has the credentials it needs to run.
    fn is_configured(&self) -> bool {
        true
    }
}

/// Cut a transcript to at most `max_chars` characters, marking the cut.
pub fn trim_transcript(transcript: &str, max_chars: usize) -> String {
    match transcript.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &transcript[..cut], TRIMMED_MARKER),
        None => transcript.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_transcript_untouched() {
        assert_eq!(trim_transcript("Short.", 10), "Short.");
        assert_eq!(trim_transcript("Exactly.", 8), "Exactly.");
    }

    #[test]
    fn test_long_transcript_trimmed() {
        let trimmed = trim_transcript("abcdefghij", 4);
        assert_eq!(trimmed, format!("abcd{}", TRIMMED_MARKER));
    }

    #[test]
    fn test_trim_counts_characters() {
        let trimmed = trim_transcript("héllo wörld", 5);
        assert_eq!(trimmed, format!("héllo{}", TRIMMED_MARKER));
    }
}
