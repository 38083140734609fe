//! tldw - YouTube video summaries from captions
//!
//! Fetches the caption track of a YouTube video, rebuilds it into readable
//! paragraphs, and asks an LLM for a summary.
//!
//! # Architecture
//!
//! - `captions` - Caption source abstraction and YouTube implementation
//! - `transcript` - Caption-to-prose formatting
//! - `summary` - LLM summarization
//! - `pipeline` - Coordination of the steps above
//! - `server` - HTTP API
//! - `config` - Settings and prompt templates
//!
//! # Example
//!
//! ```rust,no_run
//! use tldw::config::Settings;
//! use tldw::pipeline::Pipeline;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let pipeline = Pipeline::new(&settings)?;
//!
//!     let result = pipeline.summarize("https://youtu.be/dQw4w9WgXcQ").await?;
//!     println!("{}\n\n{}", result.video_title, result.summary);
//!
//!     Ok(())
//! }
//! ```

pub mod captions;
pub mod cli;
pub mod config;
pub mod error;
pub mod openai;
pub mod pipeline;
pub mod server;
pub mod summary;
pub mod transcript;

pub use error::{Result, TldwError};
