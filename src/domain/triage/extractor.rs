//! Symptom extractor - entity recognition with lexicon-scan fallback.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::ports::{CapabilityError, EntityRecognizer, EntitySpan};

use super::lexicon::Lexicon;
use super::text::normalize;
use super::values::SymptomMention;

/// Finds symptom mentions in an utterance.
///
/// Results are de-duplicated by canonical symptom and ordered by position.
/// The recognizer's adaptive state is reset after every call.
#[derive(Clone)]
pub struct SymptomExtractor {
    recognizer: Arc<dyn EntityRecognizer>,
    lexicon: Arc<Lexicon>,
}

impl SymptomExtractor {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>, lexicon: Arc<Lexicon>) -> Self {
        Self { recognizer, lexicon }
    }

    /// Extracts mentions from `text`, using `tokens` for the recognizer.
    pub fn extract(&self, text: &str, tokens: &[String]) -> Vec<SymptomMention> {
        let found = self.recognizer.find(tokens);
        self.recognizer.reset();

        let mentions = match found {
            Ok(spans) => self.resolve_spans(spans, tokens),
            Err(CapabilityError::Unavailable(_)) => Vec::new(),
            Err(err @ CapabilityError::Failed(_)) => {
                warn!(error = %err, "Entity recognizer failed, scanning lexicon");
                Vec::new()
            }
        };

        if !mentions.is_empty() {
            return mentions;
        }

        let mentions = self.lexicon.scan_symptoms(&normalize(text));
        debug!(count = mentions.len(), "Lexicon scan for symptoms");
        mentions
    }

    fn resolve_spans(&self, mut spans: Vec<EntitySpan>, tokens: &[String]) -> Vec<SymptomMention> {
        spans.sort_by_key(|s| (s.start, s.end));

        let mut mentions: Vec<SymptomMention> = Vec::new();
        for span in spans {
            if !span.fits(tokens.len()) {
                debug!(start = span.start, end = span.end, "Skipping out-of-range entity span");
                continue;
            }
            let surface = tokens[span.start..span.end].join(" ");
            let Some(entry) = self.lexicon.canonical_for_surface(&surface) else {
                continue;
            };
            if mentions.iter().any(|m| m.symptom == entry.canonical) {
                continue;
            }
            mentions.push(SymptomMention::new(entry.canonical.clone(), surface));
        }
        mentions
    }
}

impl std::fmt::Debug for SymptomExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymptomExtractor").finish_non_exhaustive()
    }
}
