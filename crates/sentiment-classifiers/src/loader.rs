//! One-shot loading of the model and vocabulary artifacts
//!
//! Each artifact is loaded independently. A missing file or a deserialization
//! failure leaves that artifact unset and records the error for display; it
//! never aborts the other load.

use crate::model::{DeviceType, PooledDenseModel, SequenceModel};
use crate::vocabulary::Vocabulary;
use sentiment_core::{ArtifactKind, Error, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Loads the artifacts from their configured paths
#[derive(Debug, Clone)]
pub struct ArtifactLoader {
    model_path: PathBuf,
    tokenizer_path: PathBuf,
    device: DeviceType,
}

/// Outcome of a load attempt: whatever loaded plus the errors for the rest
pub struct LoadedArtifacts {
    pub model: Option<Arc<dyn SequenceModel>>,
    pub vocabulary: Option<Arc<Vocabulary>>,
    pub errors: Vec<Error>,
}

impl LoadedArtifacts {
    /// Both artifacts are bound
    pub fn is_complete(&self) -> bool {
        self.model.is_some() && self.vocabulary.is_some()
    }

    /// User-facing messages for every failed artifact, in load order
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl ArtifactLoader {
    pub fn new(model_path: impl Into<PathBuf>, tokenizer_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            tokenizer_path: tokenizer_path.into(),
            device: DeviceType::Cpu,
        }
    }

    /// Set device
    pub fn with_device(mut self, device: DeviceType) -> Self {
        self.device = device;
        self
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn tokenizer_path(&self) -> &Path {
        &self.tokenizer_path
    }

    /// Load both artifacts, model first
    pub fn load(&self) -> LoadedArtifacts {
        let mut errors = Vec::new();

        let model = match self.load_model() {
            Ok(model) => {
                tracing::info!(
                    "Loaded model '{}' from {}",
                    model.name(),
                    self.model_path.display()
                );
                Some(model)
            }
            Err(e) => {
                tracing::error!("{} ({})", e, self.model_path.display());
                errors.push(e);
                None
            }
        };

        let vocabulary = match self.load_vocabulary() {
            Ok(vocabulary) => {
                tracing::info!(
                    "Loaded tokenizer with {} entries from {}",
                    vocabulary.len(),
                    self.tokenizer_path.display()
                );
                Some(vocabulary)
            }
            Err(e) => {
                tracing::error!("{} ({})", e, self.tokenizer_path.display());
                errors.push(e);
                None
            }
        };

        LoadedArtifacts {
            model,
            vocabulary,
            errors,
        }
    }

    /// Load the model artifact
    pub fn load_model(&self) -> Result<Arc<dyn SequenceModel>> {
        ensure_exists(ArtifactKind::Model, &self.model_path)?;
        let model = PooledDenseModel::load(&self.model_path, self.device)?;
        Ok(Arc::new(model))
    }

    /// Load the vocabulary artifact
    pub fn load_vocabulary(&self) -> Result<Arc<Vocabulary>> {
        ensure_exists(ArtifactKind::Tokenizer, &self.tokenizer_path)?;
        let vocabulary = Vocabulary::from_file(&self.tokenizer_path)?;
        Ok(Arc::new(vocabulary))
    }
}

fn ensure_exists(kind: ArtifactKind, path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::missing_artifact(kind, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_files_reported_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ArtifactLoader::new(
            dir.path().join("model.safetensors"),
            dir.path().join("tokenizer.json"),
        );

        let artifacts = loader.load();
        assert!(artifacts.model.is_none());
        assert!(artifacts.vocabulary.is_none());
        assert!(!artifacts.is_complete());
        assert_eq!(
            artifacts.error_messages(),
            vec![
                "Model file not found. Please check the model file path.".to_string(),
                "Tokenizer file not found. Please check the tokenizer file path.".to_string(),
            ]
        );
    }

    #[test]
    fn test_tokenizer_loads_even_when_model_missing() {
        let dir = tempfile::tempdir().unwrap();
        let tokenizer_path = dir.path().join("tokenizer.json");
        std::fs::write(&tokenizer_path, r#"{"config": {"word_index": {"good": 1}}}"#).unwrap();

        let artifacts =
            ArtifactLoader::new(dir.path().join("missing.safetensors"), &tokenizer_path).load();
        assert!(artifacts.model.is_none());
        assert!(artifacts.vocabulary.is_some());
        assert_eq!(artifacts.errors.len(), 1);
        assert_eq!(artifacts.errors[0].artifact_kind(), Some(ArtifactKind::Model));
    }

    #[test]
    fn test_corrupt_model_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let model_path = dir.path().join("model.safetensors");
        std::fs::write(&model_path, b"definitely not safetensors").unwrap();

        let err = ArtifactLoader::new(&model_path, dir.path().join("t.json"))
            .load_model()
            .err()
            .unwrap();
        assert!(matches!(
            err,
            Error::ArtifactLoad {
                kind: ArtifactKind::Model,
                ..
            }
        ));
        assert!(err.to_string().starts_with("Error loading model: "));
    }
}
