//! CLI command implementations.

mod config;
mod serve;
mod summarize;
mod transcript;

pub use config::run_config;
pub use serve::run_serve;
pub use summarize::run_summarize;
pub use transcript::run_transcript;
