//! Per-request analysis outcome shared by the page, the JSON API and the CLI

use sentiment_classifiers::SentimentPipeline;
use sentiment_core::{Error, Prediction};

/// Shown when the input is empty
pub const EMPTY_INPUT_WARNING: &str = "Please enter a text to analyze.";

/// Shown after any prediction failure
pub const ANALYSIS_FAILED: &str = "An error occurred during sentiment analysis.";

/// What one submission produced
#[derive(Debug)]
pub enum Analysis {
    /// Nothing to analyze
    Idle,
    /// Pipeline produced a prediction
    Result(Prediction),
    /// Pipeline failed for this request
    Error(Error),
}

impl Analysis {
    /// Run the pipeline unless the input is empty.
    ///
    /// Only the empty string is treated as no input; whitespace is analyzed.
    pub fn run(pipeline: &SentimentPipeline, text: &str) -> Self {
        if text.is_empty() {
            return Self::Idle;
        }

        match pipeline.predict(text) {
            Ok(prediction) => Self::Result(prediction),
            Err(e) => {
                tracing::warn!("{}", e);
                Self::Error(e)
            }
        }
    }

    /// Messages to display for a failed analysis, most specific first
    pub fn error_messages(&self) -> Vec<String> {
        match self {
            Self::Error(e) => vec![e.to_string(), ANALYSIS_FAILED.to_string()],
            _ => Vec::new(),
        }
    }

    /// Lines printed for this outcome, as shown on the page
    pub fn summary_lines(&self) -> Vec<String> {
        match self {
            Self::Idle => vec![EMPTY_INPUT_WARNING.to_string()],
            Self::Result(prediction) => vec![
                format!(
                    "The sentiment of the text is: {} {}",
                    prediction.label,
                    prediction.label.emoji()
                ),
                format!(
                    "Confidence percentage is: {}",
                    prediction.confidence_percent()
                ),
            ],
            Self::Error(_) => self.error_messages(),
        }
    }
}
