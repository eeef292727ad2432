//! Fixed-length sequence padding and truncation

use serde::{Deserialize, Serialize};

/// Filler value used for padding
pub const PAD_VALUE: u32 = 0;

/// Which end of a sequence padding or truncation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Start of the sequence (left)
    #[default]
    Pre,
    /// End of the sequence (right)
    Post,
}

/// Padding settings for turning token sequences into model input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddingConfig {
    /// Output length
    pub max_length: usize,

    /// Where filler values go when the sequence is short
    #[serde(default)]
    pub padding: Side,

    /// Which end is cut when the sequence is long
    #[serde(default)]
    pub truncating: Side,

    /// Filler value
    #[serde(default)]
    pub value: u32,
}

impl Default for PaddingConfig {
    fn default() -> Self {
        Self::new(100)
    }
}

impl PaddingConfig {
    /// Pre-padding and pre-truncation with zeros
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            padding: Side::Pre,
            truncating: Side::Pre,
            value: PAD_VALUE,
        }
    }

    pub fn with_padding(mut self, side: Side) -> Self {
        self.padding = side;
        self
    }

    pub fn with_truncating(mut self, side: Side) -> Self {
        self.truncating = side;
        self
    }

    /// Pad or truncate `sequence` to exactly `max_length` values
    pub fn apply(&self, sequence: &[u32]) -> Vec<u32> {
        pad_sequence(sequence, self)
    }
}

/// Pad or truncate a sequence to exactly `config.max_length` values
pub fn pad_sequence(sequence: &[u32], config: &PaddingConfig) -> Vec<u32> {
    let max_length = config.max_length;

    let kept = if sequence.len() > max_length {
        match config.truncating {
            Side::Pre => &sequence[sequence.len() - max_length..],
            Side::Post => &sequence[..max_length],
        }
    } else {
        sequence
    };

    let fill = max_length - kept.len();
    let mut padded = Vec::with_capacity(max_length);
    match config.padding {
        Side::Pre => {
            padded.resize(fill, config.value);
            padded.extend_from_slice(kept);
        }
        Side::Post => {
            padded.extend_from_slice(kept);
            padded.resize(max_length, config.value);
        }
    }
    padded
}
