//! Sentence and paragraph reconstruction from caption fragments.
//!
//! Fragments are folded in order into sentences. A sentence closes when the
//! newly appended text ends in terminal punctuation, or at the last fragment.
//! Closed sentences collect in a buffer that is flushed as a paragraph once it
//! holds [`PARAGRAPH_PUNCTUATION_THRESHOLD`] terminal punctuation marks.

use super::normalize_fragment;
use crate::captions::CaptionFragment;

/// Characters that end a sentence and count toward a paragraph break.
pub const TERMINAL_PUNCTUATION: &[char] = &['.', '!', '?'];

/// Number of terminal punctuation marks in the unflushed buffer that closes a paragraph.
///
/// Counts raw marks, not sentences: a sentence like "Wait... what?" counts four.
pub const PARAGRAPH_PUNCTUATION_THRESHOLD: usize = 4;

/// Separator placed between paragraphs in the final transcript.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Fold state for transcript assembly.
///
/// Each call to [`Assembler::push`] consumes the state and returns the next
/// one, so a sequence of fragments is assembled with a plain `fold`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembler {
    current_sentence: String,
    buffer: String,
    paragraphs: Vec<String>,
}

impl Assembler {
    /// Start an empty assembly.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw fragment. `is_last` marks the final fragment of the input.
    pub fn push(mut self, raw: &str, is_last: bool) -> Self {
        let text = normalize_fragment(raw);

        if !self.current_sentence.is_empty()
            && !self.current_sentence.ends_with(' ')
            && !text.starts_with(' ')
        {
            self.current_sentence.push(' ');
        }
        self.current_sentence.push_str(&text);

        if text.ends_with(TERMINAL_PUNCTUATION) || is_last {
            self.close_sentence();
        }

        self
    }

    fn close_sentence(&mut self) {
        let mut sentence = std::mem::take(&mut self.current_sentence);

        if !sentence.ends_with(TERMINAL_PUNCTUATION) {
            sentence.push('.');
        }
        if let Some(first) = sentence.get_mut(0..1) {
            first.make_ascii_uppercase();
        }

        self.buffer.push_str(&sentence);
        self.buffer.push(' ');

        if count_terminal_punctuation(&self.buffer) >= PARAGRAPH_PUNCTUATION_THRESHOLD {
            self.paragraphs.push(self.buffer.trim().to_string());
            self.buffer.clear();
        }
    }

    /// Text accumulated for the sentence still in progress.
    pub fn current_sentence(&self) -> &str {
        &self.current_sentence
    }

    /// Closed sentences not yet flushed to a paragraph.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Paragraphs flushed so far.
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// End the fold, returning flushed paragraphs and the unflushed buffer.
    ///
    /// A sentence still in progress is discarded; it can only exist when the
    /// final fragment was never pushed with `is_last` set.
    pub fn finish(self) -> Assembled {
        Assembled {
            paragraphs: self.paragraphs,
            trailing_buffer: self.buffer,
        }
    }
}

/// Result of folding every fragment through an [`Assembler`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembled {
    /// Paragraphs flushed at the punctuation threshold.
    pub paragraphs: Vec<String>,
    /// Closed sentences left over after the last flush.
    pub trailing_buffer: String,
}

impl Assembled {
    /// All paragraphs, including the trailing partial one if it has text.
    pub fn into_paragraphs(self) -> Vec<String> {
        let mut paragraphs = self.paragraphs;
        let trailing = self.trailing_buffer.trim();
        if !trailing.is_empty() {
            paragraphs.push(trailing.to_string());
        }
        paragraphs
    }

    /// Join all paragraphs into the final transcript text.
    pub fn into_text(self) -> String {
        self.into_paragraphs().join(PARAGRAPH_SEPARATOR)
    }
}

/// Fold an ordered fragment sequence into paragraphs.
pub fn assemble(fragments: &[CaptionFragment]) -> Assembled {
    let last = fragments.len().saturating_sub(1);
    fragments
        .iter()
        .enumerate()
        .fold(Assembler::new(), |state, (i, fragment)| {
            state.push(&fragment.text, i == last)
        })
        .finish()
}

/// Reconstruct readable, paragraph-structured text from caption fragments.
pub fn format_transcript(fragments: &[CaptionFragment]) -> String {
    assemble(fragments).into_text()
}

fn count_terminal_punctuation(text: &str) -> usize {
    text.matches(TERMINAL_PUNCTUATION).count()
}
