//! Triage - the conversational core of the health assistant.
//!
//! # Components
//!
//! - `Lexicon` - keyword tables shared by every component
//! - `UtteranceClassifier` - category of an utterance
//! - `SymptomExtractor` - symptom mentions in an utterance
//! - `DetailParser` - duration, severity and escalation of a detail reply
//! - `AdviceGenerator` - recommendation for a symptom and its details
//! - `DialogueState` - per-user slot-filling state
//!
//! All components are pure with respect to the dialogue: they never touch
//! session state and never fail. Capability failures degrade to lexicon rules.

mod advice;
mod classifier;
mod detail_parser;
mod dialogue_state;
mod errors;
mod extractor;
mod lexicon;
pub mod templates;
pub(crate) mod text;
mod values;

pub use advice::{AdviceGenerator, PROLONGED_DAYS};
pub use classifier::{UtteranceClassifier, DEFAULT_CONFIDENCE_THRESHOLD};
pub use detail_parser::DetailParser;
pub use dialogue_state::DialogueState;
pub use errors::LexiconError;
pub use extractor::SymptomExtractor;
pub use lexicon::{CategoryRule, DurationPhrase, Lexicon, NumberWord, SymptomEntry};
pub use text::{normalize, whitespace_tokens};
pub use values::{
    Category, ClassificationResult, ClassificationSource, ParsedDetails, Severity, SymptomMention,
};
