//! Error types for the sentiment demo
//!
//! The `Display` output of each variant is the message shown to the user, so
//! the wording here is part of the interface.

use crate::types::ArtifactKind;
use std::path::PathBuf;

/// Result type alias using the demo's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for artifact loading and prediction
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Artifact file is absent at its configured path
    #[error("{} file not found. Please check the {} file path.", .kind.title(), .kind.noun())]
    MissingArtifact { kind: ArtifactKind, path: PathBuf },

    /// Artifact file exists but could not be deserialized
    #[error("Error loading {}: {message}", .kind.noun())]
    ArtifactLoad { kind: ArtifactKind, message: String },

    /// Any failure while encoding, running inference, or thresholding
    #[error("Error during prediction: {0}")]
    Prediction(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new missing-artifact error
    pub fn missing_artifact(kind: ArtifactKind, path: impl Into<PathBuf>) -> Self {
        Self::MissingArtifact {
            kind,
            path: path.into(),
        }
    }

    /// Create a new artifact load error
    pub fn artifact_load(kind: ArtifactKind, message: impl Into<String>) -> Self {
        Self::ArtifactLoad {
            kind,
            message: message.into(),
        }
    }

    /// Create a new prediction error
    pub fn prediction(msg: impl Into<String>) -> Self {
        Self::Prediction(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// The artifact this error concerns, if any
    pub fn artifact_kind(&self) -> Option<ArtifactKind> {
        match self {
            Self::MissingArtifact { kind, .. } | Self::ArtifactLoad { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_model_message() {
        let err = Error::missing_artifact(ArtifactKind::Model, "models/model.safetensors");
        assert_eq!(
            err.to_string(),
            "Model file not found. Please check the model file path."
        );
        assert_eq!(err.artifact_kind(), Some(ArtifactKind::Model));
    }

    #[test]
    fn test_missing_tokenizer_message() {
        let err = Error::missing_artifact(ArtifactKind::Tokenizer, "models/tokenizer.json");
        assert_eq!(
            err.to_string(),
            "Tokenizer file not found. Please check the tokenizer file path."
        );
    }

    #[test]
    fn test_load_failure_carries_underlying_text() {
        let err = Error::artifact_load(ArtifactKind::Tokenizer, "expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "Error loading tokenizer: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_prediction_message() {
        let err = Error::prediction("model is not loaded");
        assert_eq!(err.to_string(), "Error during prediction: model is not loaded");
        assert_eq!(err.artifact_kind(), None);
    }

    #[test]
    fn test_config_message() {
        let err = Error::config("threshold must be within [0, 1], got 1.5");
        assert_eq!(
            err.to_string(),
            "configuration error: threshold must be within [0, 1], got 1.5"
        );
        assert_eq!(err.artifact_kind(), None);
    }
}
