use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sentiment-demo")]
#[command(author, version, about = "Interactive sentiment analysis demo")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where to find the configuration and artifacts
#[derive(Args, Debug, Clone)]
pub struct ArtifactArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "sentiment.yaml")]
    pub config: PathBuf,

    /// Model file path (overrides the configuration file)
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Tokenizer file path (overrides the configuration file)
    #[arg(long)]
    pub tokenizer: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the demo server with web UI
    Serve {
        #[command(flatten)]
        artifacts: ArtifactArgs,

        /// Listen port
        #[arg(short, long, default_value = "8501")]
        port: u16,

        /// Listen address
        #[arg(short, long, default_value = "127.0.0.1")]
        address: String,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a single text and print the result
    Predict {
        /// Text to analyze
        text: String,

        #[command(flatten)]
        artifacts: ArtifactArgs,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}
