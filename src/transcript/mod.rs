//! Transcript formatting.
//!
//! Turns the ordered caption fragments of a video into sentence- and
//! paragraph-structured prose suitable for reading and summarization.
//!
//! ```
//! use tldw::captions::CaptionFragment;
//! use tldw::transcript::format_transcript;
//!
//! let fragments = vec![
//!     CaptionFragment::new("so this is", 0.0, 1.5),
//!     CaptionFragment::new("R&amp;D.", 1.5, 1.0),
//! ];
//! assert_eq!(format_transcript(&fragments), "So this is R&D.");
//! ```

mod assembler;
mod normalize;

pub use assembler::{
    assemble, format_transcript, Assembled, Assembler, PARAGRAPH_PUNCTUATION_THRESHOLD,
    PARAGRAPH_SEPARATOR, TERMINAL_PUNCTUATION,
};
pub use normalize::normalize_fragment;
