//! Detail parser - duration, severity and escalation from a detail reply.
//!
//! Each facet is scanned independently against the same normalized text.
//! Duration takes the leftmost match among:
//! - a bare integer followed by "day"/"days"
//! - a lexicon number word followed by "day"/"days"
//! - a fixed lexicon duration phrase ("a week", "yesterday", ...)

use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

use super::lexicon::Lexicon;
use super::text::{find_prefix, find_word, normalize};
use super::values::{ParsedDetails, Severity};

static NUMERIC_DAYS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d+)\s*-?\s*days?\b").expect("valid numeric days pattern"));

static WORD_DAYS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([a-z]+)\s*-?\s*days?\b").expect("valid word days pattern"));

/// Extracts [`ParsedDetails`] from free text.
#[derive(Debug, Clone)]
pub struct DetailParser {
    lexicon: Arc<Lexicon>,
}

impl DetailParser {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Parses duration, severity and escalation. Pure; never fails.
    pub fn parse(&self, text: &str) -> ParsedDetails {
        let text = normalize(text);
        ParsedDetails {
            days: self.duration(&text),
            severity: self.severity(&text),
            escalating: self.escalating(&text),
        }
    }

    fn duration(&self, text: &str) -> Option<u32> {
        let mut candidates: Vec<(usize, u32)> = Vec::new();

        for caps in NUMERIC_DAYS.captures_iter(text) {
            if let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) {
                if let Ok(days) = digits.as_str().parse::<u32>() {
                    candidates.push((whole.start(), days));
                    break;
                }
            }
        }

        for caps in WORD_DAYS.captures_iter(text) {
            if let (Some(whole), Some(word)) = (caps.get(0), caps.get(1)) {
                if let Some(days) = self.lexicon.number_word(word.as_str()) {
                    candidates.push((whole.start(), days));
                    break;
                }
            }
        }

        for phrase in self.lexicon.durations() {
            if let Some(pos) = find_word(text, &phrase.phrase) {
                candidates.push((pos, phrase.days));
            }
        }

        // min_by_key keeps the first of equal positions
        candidates
            .into_iter()
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, days)| days)
    }

    // Anything without a severe term is mild, so mild words need no table
    fn severity(&self, text: &str) -> Severity {
        if contains_any(text, self.lexicon.severe_terms()) {
            Severity::Severe
        } else {
            Severity::Mild
        }
    }

    fn escalating(&self, text: &str) -> bool {
        contains_any(text, self.lexicon.escalation_terms())
    }
}

fn contains_any(text: &str, terms: &[String]) -> bool {
    terms.iter().any(|t| find_prefix(text, t).is_some())
}
