//! Value objects produced and consumed by the triage components.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Confidence;

/// Category an utterance is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Greeting,
    Thanks,
    Goodbye,
    Medication,
    Advice,
    Appointment,
    Insurance,
    Info,
    Symptom,
    Unknown,
}

impl Category {
    /// Maps a label emitted by a text classifier onto a category.
    ///
    /// Matching is case-insensitive; unrecognized labels map to `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "greeting" | "greetings" => Category::Greeting,
            "thanks" | "thank_you" | "gratitude" => Category::Thanks,
            "goodbye" | "farewell" => Category::Goodbye,
            "medication" | "medicine" => Category::Medication,
            "advice" => Category::Advice,
            "appointment" => Category::Appointment,
            "insurance" => Category::Insurance,
            "info" | "information" => Category::Info,
            "symptom" | "symptoms" => Category::Symptom,
            _ => Category::Unknown,
        }
    }

    /// Returns the canonical label for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::Thanks => "thanks",
            Category::Goodbye => "goodbye",
            Category::Medication => "medication",
            Category::Advice => "advice",
            Category::Appointment => "appointment",
            Category::Insurance => "insurance",
            Category::Info => "info",
            Category::Symptom => "symptom",
            Category::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which path produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationSource {
    /// The injected text classifier.
    Model,
    /// The ordered keyword rules of the lexicon.
    Rules,
}

/// Outcome of classifying one utterance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    pub confidence: Confidence,
    pub source: ClassificationSource,
}

impl ClassificationResult {
    /// A deterministic keyword-rule classification.
    pub fn from_rules(category: Category) -> Self {
        Self {
            category,
            confidence: Confidence::CERTAIN,
            source: ClassificationSource::Rules,
        }
    }

    /// A classification reported by the text classifier.
    pub fn from_model(category: Category, confidence: Confidence) -> Self {
        Self {
            category,
            confidence,
            source: ClassificationSource::Model,
        }
    }

    /// True when the text classifier produced this result with a score below `threshold`.
    pub fn is_uncertain_model_result(&self, threshold: f64) -> bool {
        self.source == ClassificationSource::Model && self.confidence.is_below(threshold)
    }
}

/// A symptom found in an utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomMention {
    /// Canonical symptom name from the lexicon vocabulary.
    pub symptom: String,
    /// The raw text that matched.
    pub span: String,
}

impl SymptomMention {
    pub fn new(symptom: impl Into<String>, span: impl Into<String>) -> Self {
        Self {
            symptom: symptom.into(),
            span: span.into(),
        }
    }
}

/// How bad the user reports a symptom to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Mild,
    Severe,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Mild => write!(f, "mild"),
            Severity::Severe => write!(f, "severe"),
        }
    }
}

/// Duration, severity and escalation extracted from a detail reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ParsedDetails {
    /// Number of days the symptom has lasted; `None` when no duration was found.
    pub days: Option<u32>,
    pub severity: Severity,
    pub escalating: bool,
}

impl ParsedDetails {
    /// True once a duration has been found, which completes the slot.
    pub fn has_duration(&self) -> bool {
        self.days.is_some()
    }
}
