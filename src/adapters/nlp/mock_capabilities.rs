//! Mock NLP capabilities for testing.
//!
//! Configurable implementations of the capability ports, allowing tests to
//! drive the model-backed paths without a trained model.
//!
//! # Example
//!
//! ```ignore
//! let classifier = MockTextClassifier::new()
//!     .with_label("greeting", 0.9)
//!     .with_error(CapabilityError::failed("model crashed"));
//!
//! let recognizer = MockEntityRecognizer::new().with_spans(vec![EntitySpan::new(3, 4)]);
//! ```

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ports::{
    CapabilityError, ClassifierOutput, EntityRecognizer, EntitySpan, TextClassifier,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Mock text classifier.
///
/// Queued responses are consumed in order; once the queue is empty the
/// default response is returned (unavailable unless configured).
#[derive(Debug, Clone)]
pub struct MockTextClassifier {
    responses: Arc<Mutex<VecDeque<Result<ClassifierOutput, CapabilityError>>>>,
    default: Result<ClassifierOutput, CapabilityError>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl Default for MockTextClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTextClassifier {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            default: Err(CapabilityError::unavailable("mock text classifier")),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A classifier that always answers `label` with `score`.
    pub fn always(label: &str, score: f64) -> Self {
        let mut mock = Self::new();
        mock.default = Ok(scored(label, score));
        mock
    }

    /// Queues a single labelled response.
    pub fn with_label(self, label: &str, score: f64) -> Self {
        lock(&self.responses).push_back(Ok(scored(label, score)));
        self
    }

    /// Queues a full response.
    pub fn with_output(self, output: ClassifierOutput) -> Self {
        lock(&self.responses).push_back(Ok(output));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: CapabilityError) -> Self {
        lock(&self.responses).push_back(Err(error));
        self
    }

    /// Returns the number of calls made to this classifier.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all texts passed to this classifier.
    pub fn get_calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }
}

fn scored(label: &str, score: f64) -> ClassifierOutput {
    ClassifierOutput::new(label, HashMap::from([(label.to_string(), score)]))
}

impl TextClassifier for MockTextClassifier {
    fn classify(&self, text: &str) -> Result<ClassifierOutput, CapabilityError> {
        lock(&self.calls).push(text.to_string());
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| self.default.clone())
    }
}

/// Mock entity recognizer.
///
/// Tracks `reset` calls so tests can verify adaptive state is cleared.
#[derive(Debug, Clone)]
pub struct MockEntityRecognizer {
    responses: Arc<Mutex<VecDeque<Result<Vec<EntitySpan>, CapabilityError>>>>,
    default: Result<Vec<EntitySpan>, CapabilityError>,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
    resets: Arc<AtomicUsize>,
}

impl Default for MockEntityRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEntityRecognizer {
    /// A recognizer that finds nothing unless configured.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            default: Ok(Vec::new()),
            calls: Arc::new(Mutex::new(Vec::new())),
            resets: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Queues spans for the next call.
    pub fn with_spans(self, spans: Vec<EntitySpan>) -> Self {
        lock(&self.responses).push_back(Ok(spans));
        self
    }

    /// Queues an error for the next call.
    pub fn with_error(self, error: CapabilityError) -> Self {
        lock(&self.responses).push_back(Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all token sequences passed to this recognizer.
    pub fn get_calls(&self) -> Vec<Vec<String>> {
        lock(&self.calls).clone()
    }

    pub fn reset_count(&self) -> usize {
        self.resets.load(Ordering::SeqCst)
    }
}

impl EntityRecognizer for MockEntityRecognizer {
    fn find(&self, tokens: &[String]) -> Result<Vec<EntitySpan>, CapabilityError> {
        lock(&self.calls).push(tokens.to_vec());
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| self.default.clone())
    }

    fn reset(&self) {
        self.resets.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifier_consumes_queue_then_uses_default() {
        let mock = MockTextClassifier::new().with_label("greeting", 0.9);

        assert_eq!(mock.classify("hi").unwrap().category, "greeting");
        assert!(matches!(mock.classify("hi"), Err(CapabilityError::Unavailable(_))));
        assert_eq!(mock.call_count(), 2);
    }

    #[test]
    fn always_classifier_repeats() {
        let mock = MockTextClassifier::always("symptom", 0.8);
        assert_eq!(mock.classify("a").unwrap().top_score(), 0.8);
        assert_eq!(mock.classify("b").unwrap().top_score(), 0.8);
        assert_eq!(mock.get_calls(), vec!["a", "b"]);
    }

    #[test]
    fn recognizer_records_calls_and_resets() {
        let mock = MockEntityRecognizer::new().with_spans(vec![EntitySpan::new(0, 1)]);
        let tokens = vec!["fever".to_string()];

        assert_eq!(mock.find(&tokens).unwrap(), vec![EntitySpan::new(0, 1)]);
        assert!(mock.find(&tokens).unwrap().is_empty());
        mock.reset();

        assert_eq!(mock.call_count(), 2);
        assert_eq!(mock.reset_count(), 1);
    }

    #[test]
    fn clones_share_state() {
        let mock = MockEntityRecognizer::new();
        let clone = mock.clone();
        clone.reset();
        assert_eq!(mock.reset_count(), 1);
    }
}
