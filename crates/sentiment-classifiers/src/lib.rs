//! Sentiment Classifiers
//!
//! Turns a line of text into a binary sentiment prediction:
//! - `vocabulary`: fitted word index and tokenization rule
//! - `sequence`: fixed-length padding and truncation
//! - `model`: Candle inference behind the `SequenceModel` trait
//! - `classifier`: thresholding of P(Positive)
//! - `loader`: one-shot artifact loading with per-artifact errors
//! - `pipeline`: the encode → infer → threshold chain
//!
//! All inference runs on CPU by default.

pub mod classifier;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod sequence;
pub mod vocabulary;

pub use classifier::{SentimentClassifier, DEFAULT_THRESHOLD};
pub use loader::{ArtifactLoader, LoadedArtifacts};
pub use model::{DeviceType, PooledDenseModel, SequenceModel};
pub use pipeline::SentimentPipeline;
pub use sequence::{pad_sequence, PaddingConfig, Side, PAD_VALUE};
pub use vocabulary::Vocabulary;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::SentimentClassifier;
    pub use crate::loader::{ArtifactLoader, LoadedArtifacts};
    pub use crate::model::{DeviceType, SequenceModel};
    pub use crate::pipeline::SentimentPipeline;
    pub use crate::sequence::PaddingConfig;
    pub use crate::vocabulary::Vocabulary;
}
