//! Shared domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl SentimentLabel {
    /// Label text as shown to the user
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
        }
    }

    /// Emoji displayed next to the label
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Positive => "😀",
            Self::Negative => "😢",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one successful prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    /// Thresholded label
    pub label: SentimentLabel,

    /// Raw model output, i.e. P(Positive), in [0, 1].
    ///
    /// This is not the confidence in `label`: a Negative prediction with
    /// confidence 0.12 means the model gave Positive a 12% probability.
    pub confidence: f32,
}

impl Prediction {
    pub fn new(label: SentimentLabel, confidence: f32) -> Self {
        Self { label, confidence }
    }

    /// Confidence as a percentage string with two decimals, e.g. `92.00%`
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}

/// The two artifacts loaded at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Model,
    Tokenizer,
}

impl ArtifactKind {
    /// Lower-case noun used inside sentences
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Tokenizer => "tokenizer",
        }
    }

    /// Capitalized noun used at the start of sentences
    pub fn title(&self) -> &'static str {
        match self {
            Self::Model => "Model",
            Self::Tokenizer => "Tokenizer",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}
