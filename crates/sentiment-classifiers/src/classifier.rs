//! Threshold classifier turning P(Positive) into a label

use sentiment_core::{Error, Prediction, Result, SentimentLabel};

/// Default decision threshold
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// Binary classifier over a single probability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentClassifier {
    threshold: f32,
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SentimentClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom threshold in [0, 1]
    pub fn with_threshold(threshold: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::config(format!(
                "threshold must be within [0, 1], got {}",
                threshold
            )));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Label `probability` (P(Positive)); `probability >= threshold` is Positive.
    ///
    /// The returned confidence is the probability itself, not the confidence in
    /// the chosen label.
    pub fn classify(&self, probability: f32) -> Result<Prediction> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(Error::prediction(format!(
                "model output {} is not a probability",
                probability
            )));
        }

        let label = if probability >= self.threshold {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Negative
        };

        Ok(Prediction::new(label, probability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boundary_is_positive() {
        let prediction = SentimentClassifier::new().classify(0.5).unwrap();
        assert_eq!(prediction.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_negative_keeps_positive_probability() {
        let prediction = SentimentClassifier::new().classify(0.12).unwrap();
        assert_eq!(prediction.label, SentimentLabel::Negative);
        assert_eq!(prediction.confidence, 0.12);
        assert_eq!(prediction.confidence_percent(), "12.00%");
    }

    #[test]
    fn test_rejects_non_probability() {
        let classifier = SentimentClassifier::new();
        assert!(matches!(classifier.classify(f32::NAN), Err(Error::Prediction(_))));
        assert!(classifier.classify(1.5).is_err());
        assert!(classifier.classify(-0.1).is_err());
    }

    #[test]
    fn test_custom_threshold() {
        let classifier = SentimentClassifier::with_threshold(0.8).unwrap();
        assert_eq!(classifier.classify(0.7).unwrap().label, SentimentLabel::Negative);
        assert!(SentimentClassifier::with_threshold(1.2).is_err());
    }

    proptest! {
        #[test]
        fn prop_label_follows_threshold(p in 0.0f32..=1.0) {
            let prediction = SentimentClassifier::new().classify(p).unwrap();
            let expected = if p >= 0.5 { SentimentLabel::Positive } else { SentimentLabel::Negative };
            prop_assert_eq!(prediction.label, expected);
            prop_assert_eq!(prediction.confidence, p);
        }
    }
}
