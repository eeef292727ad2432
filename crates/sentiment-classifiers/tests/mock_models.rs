//! Mock models for testing
//!
//! Provides configurable implementations of the SequenceModel trait for
//! testing the pipeline's labelling, determinism and error paths.

use sentiment_classifiers::{
    PaddingConfig, SentimentClassifier, SentimentPipeline, SequenceModel, Vocabulary,
};
use sentiment_core::{Error, Result, SentimentLabel};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// A model that returns a fixed probability and records its inputs
pub struct MockModel {
    name: String,
    probability: f32,
    call_count: AtomicU32,
    last_input: Mutex<Vec<u32>>,
}

impl MockModel {
    pub fn new(probability: f32) -> Self {
        Self {
            name: "mock".to_string(),
            probability,
            call_count: AtomicU32::new(0),
            last_input: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn last_input(&self) -> Vec<u32> {
        self.last_input.lock().unwrap().clone()
    }
}

impl SequenceModel for MockModel {
    fn predict_proba(&self, sequence: &[u32]) -> Result<f32> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_input.lock().unwrap() = sequence.to_vec();
        Ok(self.probability)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A model that always fails - for testing error paths
pub struct FailingModel;

impl SequenceModel for FailingModel {
    fn predict_proba(&self, _sequence: &[u32]) -> Result<f32> {
        Err(Error::prediction("simulated inference failure"))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

fn vocabulary() -> Arc<Vocabulary> {
    let mut table = HashMap::new();
    for (word, idx) in [("i", 1), ("love", 2), ("this", 3), ("is", 4), ("terrible", 5)] {
        table.insert(word.to_string(), idx);
    }
    Arc::new(Vocabulary::from_word_index(table))
}

fn pipeline_with(model: Arc<dyn SequenceModel>) -> SentimentPipeline {
    SentimentPipeline::new(Some(vocabulary()), Some(model))
}

#[test]
fn test_positive_scenario() {
    let model = Arc::new(MockModel::new(0.92));
    let pipeline = pipeline_with(model.clone());

    let prediction = pipeline.predict("I love this!").unwrap();

    assert_eq!(prediction.label, SentimentLabel::Positive);
    assert_eq!(prediction.label.emoji(), "😀");
    assert_eq!(prediction.confidence_percent(), "92.00%");
    assert_eq!(model.call_count(), 1);
}

#[test]
fn test_negative_scenario() {
    let pipeline = pipeline_with(Arc::new(MockModel::new(0.12)));

    let prediction = pipeline.predict("This is terrible").unwrap();

    assert_eq!(prediction.label, SentimentLabel::Negative);
    assert_eq!(prediction.label.emoji(), "😢");
    assert_eq!(prediction.confidence_percent(), "12.00%");
}

#[test]
fn test_model_receives_padded_sequence() {
    let model = Arc::new(MockModel::new(0.7));
    let pipeline = pipeline_with(model.clone());

    pipeline.predict("I love this!").unwrap();

    let input = model.last_input();
    assert_eq!(input.len(), 100);
    assert!(input[..97].iter().all(|&v| v == 0));
    assert_eq!(&input[97..], &[1, 2, 3]);
}

#[test]
fn test_custom_padding_length() {
    let model = Arc::new(MockModel::new(0.7));
    let pipeline = pipeline_with(model.clone()).with_padding(PaddingConfig::new(2));

    pipeline.predict("I love this").unwrap();
    assert_eq!(model.last_input(), vec![2, 3]);
}

#[test]
fn test_prediction_is_deterministic() {
    let pipeline = pipeline_with(Arc::new(MockModel::new(0.63)));

    let first = pipeline.predict("I love this").unwrap();
    let second = pipeline.predict("I love this").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_custom_threshold_applies() {
    let pipeline = pipeline_with(Arc::new(MockModel::new(0.6)))
        .with_classifier(SentimentClassifier::with_threshold(0.75).unwrap());

    let prediction = pipeline.predict("I love this").unwrap();
    assert_eq!(prediction.label, SentimentLabel::Negative);
    assert_eq!(prediction.confidence_percent(), "60.00%");
}

#[test]
fn test_failing_model_is_prediction_error() {
    let pipeline = pipeline_with(Arc::new(FailingModel));

    let err = pipeline.predict("I love this").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error during prediction: simulated inference failure"
    );
}

#[test]
fn test_out_of_range_probability_is_prediction_error() {
    let pipeline = pipeline_with(Arc::new(MockModel::new(1.7)));
    assert!(matches!(pipeline.predict("I love this"), Err(Error::Prediction(_))));
}

#[test]
fn test_unbound_model_fails_every_request() {
    let pipeline = SentimentPipeline::new(Some(vocabulary()), None);

    for _ in 0..2 {
        let err = pipeline.predict("I love this").unwrap_err();
        assert_eq!(err.to_string(), "Error during prediction: model is not loaded");
    }
}

#[test]
fn test_unbound_tokenizer_fails_before_model() {
    let model = Arc::new(MockModel::new(0.9));
    let pipeline = SentimentPipeline::new(None, Some(model.clone() as Arc<dyn SequenceModel>));

    let err = pipeline.predict("I love this").unwrap_err();
    assert_eq!(err.to_string(), "Error during prediction: tokenizer is not loaded");
    assert_eq!(model.call_count(), 0);
}

#[test]
fn test_whitespace_only_text_still_predicts() {
    let model = Arc::new(MockModel::new(0.5));
    let pipeline = pipeline_with(model.clone());

    let prediction = pipeline.predict("   ").unwrap();
    assert_eq!(prediction.label, SentimentLabel::Positive);
    assert!(model.last_input().iter().all(|&v| v == 0));
}
