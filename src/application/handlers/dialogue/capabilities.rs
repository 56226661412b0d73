//! Capabilities - the NLP providers injected into the dialogue manager.

use std::sync::Arc;

use crate::ports::{
    EntityRecognizer, NoEntityRecognizer, NoTextClassifier, NoTokenizer, TextClassifier, Tokenizer,
};

/// NLP providers consumed by the dialogue.
///
/// Defaults to the explicit "unavailable" provider for every capability, so a
/// manager built without models runs entirely on lexicon rules.
#[derive(Clone)]
pub struct Capabilities {
    pub text_classifier: Arc<dyn TextClassifier>,
    pub entity_recognizer: Arc<dyn EntityRecognizer>,
    pub tokenizer: Arc<dyn Tokenizer>,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            text_classifier: Arc::new(NoTextClassifier),
            entity_recognizer: Arc::new(NoEntityRecognizer),
            tokenizer: Arc::new(NoTokenizer),
        }
    }
}

impl Capabilities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text_classifier(mut self, classifier: Arc<dyn TextClassifier>) -> Self {
        self.text_classifier = classifier;
        self
    }

    pub fn with_entity_recognizer(mut self, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        self.entity_recognizer = recognizer;
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities").finish_non_exhaustive()
    }
}
