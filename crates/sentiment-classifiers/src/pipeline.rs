//! Encode → infer → threshold
//!
//! The pipeline owns read-only handles to both artifacts. Either may be
//! unbound when its load failed at startup, in which case every prediction
//! fails with a prediction error instead of touching the missing artifact.

use crate::classifier::SentimentClassifier;
use crate::loader::LoadedArtifacts;
use crate::model::SequenceModel;
use crate::sequence::PaddingConfig;
use crate::vocabulary::Vocabulary;
use sentiment_core::{Error, Prediction, Result};
use std::sync::Arc;
use std::time::Instant;

/// Text-in, prediction-out pipeline over the loaded artifacts
#[derive(Clone)]
pub struct SentimentPipeline {
    vocabulary: Option<Arc<Vocabulary>>,
    model: Option<Arc<dyn SequenceModel>>,
    padding: PaddingConfig,
    classifier: SentimentClassifier,
}

impl SentimentPipeline {
    pub fn new(
        vocabulary: Option<Arc<Vocabulary>>,
        model: Option<Arc<dyn SequenceModel>>,
    ) -> Self {
        Self {
            vocabulary,
            model,
            padding: PaddingConfig::default(),
            classifier: SentimentClassifier::default(),
        }
    }

    /// Build from a load result, ignoring its errors
    pub fn from_artifacts(artifacts: &LoadedArtifacts) -> Self {
        Self::new(artifacts.vocabulary.clone(), artifacts.model.clone())
    }

    pub fn with_padding(mut self, padding: PaddingConfig) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_classifier(mut self, classifier: SentimentClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    pub fn has_vocabulary(&self) -> bool {
        self.vocabulary.is_some()
    }

    pub fn padding(&self) -> &PaddingConfig {
        &self.padding
    }

    /// Convert text to exactly `max_length` indices
    pub fn encode(&self, text: &str) -> Result<Vec<u32>> {
        let vocabulary = self
            .vocabulary
            .as_deref()
            .ok_or_else(|| Error::prediction("tokenizer is not loaded"))?;
        Ok(self.padding.apply(&vocabulary.encode(text)))
    }

    /// Run the full pipeline on one input
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        let start = Instant::now();

        let sequence = self.encode(text)?;
        let model = self
            .model
            .as_deref()
            .ok_or_else(|| Error::prediction("model is not loaded"))?;

        let probability = model.predict_proba(&sequence)?;
        let prediction = self.classifier.classify(probability)?;

        tracing::debug!(
            label = %prediction.label,
            probability,
            latency_us = start.elapsed().as_micros() as u64,
            "Prediction complete"
        );

        Ok(prediction)
    }
}
