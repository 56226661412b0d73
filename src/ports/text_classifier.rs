//! Text Classifier Port - opaque scorer mapping text to category labels.

use std::collections::HashMap;

use super::CapabilityError;

/// Raw output of a text classifier.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassifierOutput {
    /// Top-scoring label.
    pub category: String,
    /// Score per label, expected in [0, 1].
    pub scores: HashMap<String, f64>,
}

impl ClassifierOutput {
    pub fn new(category: impl Into<String>, scores: HashMap<String, f64>) -> Self {
        Self {
            category: category.into(),
            scores,
        }
    }

    /// Score of the top label; 0 when the classifier did not report one.
    pub fn top_score(&self) -> f64 {
        self.scores.get(&self.category).copied().unwrap_or(0.0)
    }
}

/// Port for a document classifier.
pub trait TextClassifier: Send + Sync {
    /// Scores `text` against the known labels.
    ///
    /// # Errors
    ///
    /// `CapabilityError::Unavailable` when no model is loaded,
    /// `CapabilityError::Failed` when scoring fails.
    fn classify(&self, text: &str) -> Result<ClassifierOutput, CapabilityError>;
}

/// Classifier used when no model is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTextClassifier;

impl TextClassifier for NoTextClassifier {
    fn classify(&self, _: &str) -> Result<ClassifierOutput, CapabilityError> {
        Err(CapabilityError::unavailable("text classifier"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_score_reads_the_top_label() {
        let scores = HashMap::from([("greeting".to_string(), 0.8), ("symptom".to_string(), 0.2)]);
        let output = ClassifierOutput::new("greeting", scores);
        assert_eq!(output.top_score(), 0.8);
    }

    #[test]
    fn missing_score_is_zero() {
        let output = ClassifierOutput::new("greeting", HashMap::new());
        assert_eq!(output.top_score(), 0.0);
    }

    #[test]
    fn no_classifier_is_unavailable() {
        let result = NoTextClassifier.classify("hello");
        assert!(matches!(result, Err(CapabilityError::Unavailable(_))));
    }
}
