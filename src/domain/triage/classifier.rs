//! Utterance classifier - model scoring with keyword-rule fallback.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::foundation::Confidence;
use crate::ports::{CapabilityError, TextClassifier};

use super::lexicon::Lexicon;
use super::text::normalize;
use super::values::{Category, ClassificationResult};

/// Default minimum model confidence.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Maps an utterance to a [`Category`].
///
/// The injected classifier is consulted first. When it is unavailable, fails,
/// or scores below the threshold, the lexicon's ordered category rules are
/// tried; a rule match is reported with full confidence. A low-confidence model
/// result is returned unchanged when no rule matches, so callers can ask for
/// clarification.
#[derive(Clone)]
pub struct UtteranceClassifier {
    model: Arc<dyn TextClassifier>,
    lexicon: Arc<Lexicon>,
    threshold: f64,
}

impl UtteranceClassifier {
    pub fn new(model: Arc<dyn TextClassifier>, lexicon: Arc<Lexicon>, threshold: f64) -> Self {
        Self {
            model,
            lexicon,
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Classifies non-blank text. Never fails.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let text = normalize(text);

        let model_result = match self.model.classify(&text) {
            Ok(output) => {
                let result = ClassificationResult::from_model(
                    Category::from_label(&output.category),
                    Confidence::new(output.top_score()),
                );
                if !result.is_uncertain_model_result(self.threshold) {
                    return result;
                }
                debug!(
                    category = %result.category,
                    confidence = %result.confidence,
                    "Model confidence below threshold, trying rules"
                );
                Some(result)
            }
            Err(CapabilityError::Unavailable(_)) => None,
            Err(err @ CapabilityError::Failed(_)) => {
                warn!(error = %err, "Text classifier failed, using keyword rules");
                None
            }
        };

        match (self.lexicon.match_category(&text), model_result) {
            (Some(category), _) => ClassificationResult::from_rules(category),
            (None, Some(low_confidence)) => low_confidence,
            (None, None) => ClassificationResult::from_rules(Category::Unknown),
        }
    }
}

impl std::fmt::Debug for UtteranceClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UtteranceClassifier")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}
