//! Sentiment Core
//!
//! Core types and error handling shared across the sentiment demo crates.
//!
//! This crate provides:
//! - The error type whose messages are shown to users
//! - Sentiment labels and prediction results
//! - Identifiers for the artifacts loaded at startup

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{ArtifactKind, Prediction, SentimentLabel};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{ArtifactKind, Prediction, SentimentLabel};
}
