pub mod captions;
pub mod summarizer;
