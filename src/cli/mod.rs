//! CLI module for tldw.

pub mod commands;
mod output;
pub mod preflight;

pub use output::{wrap_paragraphs, Output};

use clap::{Parser, Subcommand};

/// tldw - YouTube video summaries from captions
///
/// Fetches a video's captions, formats them into paragraphs, and summarizes them with an LLM.
#[derive(Parser, Debug)]
#[command(name = "tldw")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TLDW_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a YouTube video
    Summarize {
        /// YouTube URL or video ID
        url: String,

        /// LLM model to use for the summary
        #[arg(short, long)]
        model: Option<String>,

        /// Also print the formatted transcript
        #[arg(short, long)]
        transcript: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the formatted transcript of a YouTube video
    Transcript {
        /// YouTube URL or video ID
        url: String,

        /// Write the transcript to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Print the raw caption fragments as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Start the HTTP API server
    Serve {
        /// Host to bind to (default from config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (default from config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
