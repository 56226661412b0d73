//! Lexicon - keyword tables driving classification, extraction and parsing.
//!
//! The lexicon is plain immutable data. A bundled default is compiled in and
//! built once per process; deployments may load a replacement from YAML at
//! startup. All keywords are stored lowercased.
//!
//! Table order matters:
//! - `symptoms` order breaks ties between mentions found at the same position
//! - `category_rules` are evaluated in order and the first match wins

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use super::errors::LexiconError;
use super::text::{find_prefix, find_word};
use super::values::{Category, SymptomMention};

/// Maps a surface keyword to a canonical symptom name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub keyword: String,
    pub canonical: String,
}

/// A fixed phrase that denotes a duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationPhrase {
    pub phrase: String,
    pub days: u32,
}

/// A spelled-out number usable before "day(s)".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberWord {
    pub word: String,
    pub value: u32,
}

/// Keywords that select a category when the classifier cannot.
///
/// The `symptom` rule also fires on any symptom keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

/// Keyword tables for the health assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    symptoms: Vec<SymptomEntry>,
    durations: Vec<DurationPhrase>,
    number_words: Vec<NumberWord>,
    severe_terms: Vec<String>,
    escalation_terms: Vec<String>,
    category_rules: Vec<CategoryRule>,
}

static BUNDLED: Lazy<Arc<Lexicon>> = Lazy::new(|| Arc::new(Lexicon::default()));

impl Lexicon {
    /// Shared handle to the bundled lexicon.
    pub fn bundled() -> Arc<Lexicon> {
        Arc::clone(&BUNDLED)
    }

    /// Parses a lexicon from YAML, normalizing and validating it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LexiconError> {
        let mut lexicon: Lexicon = serde_yaml::from_str(yaml)?;
        lexicon.normalize();
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Loads a lexicon from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Serializes the lexicon to YAML.
    pub fn to_yaml(&self) -> Result<String, LexiconError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks that every table needed by the dialogue is populated.
    pub fn validate(&self) -> Result<(), LexiconError> {
        if self.symptoms.is_empty() {
            return Err(LexiconError::EmptySection("symptoms"));
        }
        if self
            .symptoms
            .iter()
            .any(|s| s.keyword.is_empty() || s.canonical.is_empty())
        {
            return Err(LexiconError::BlankEntry { section: "symptoms" });
        }
        if self.durations.iter().any(|d| d.phrase.is_empty()) {
            return Err(LexiconError::BlankEntry { section: "durations" });
        }
        if self.number_words.iter().any(|n| n.word.is_empty()) {
            return Err(LexiconError::BlankEntry { section: "number_words" });
        }
        if self.severe_terms.is_empty() {
            return Err(LexiconError::EmptySection("severe_terms"));
        }
        if self.category_rules.is_empty() {
            return Err(LexiconError::EmptySection("category_rules"));
        }
        Ok(())
    }

    fn normalize(&mut self) {
        fn clean(s: &mut String) {
            *s = super::text::normalize(s);
        }

        for entry in &mut self.symptoms {
            clean(&mut entry.keyword);
            entry.canonical = entry.canonical.trim().to_lowercase();
        }
        self.durations.iter_mut().for_each(|d| clean(&mut d.phrase));
        self.number_words.iter_mut().for_each(|n| clean(&mut n.word));
        self.severe_terms.iter_mut().for_each(clean);
        self.escalation_terms.iter_mut().for_each(clean);
        for rule in &mut self.category_rules {
            rule.keywords.iter_mut().for_each(clean);
        }
    }

    pub fn symptoms(&self) -> &[SymptomEntry] {
        &self.symptoms
    }

    pub fn durations(&self) -> &[DurationPhrase] {
        &self.durations
    }

    pub fn severe_terms(&self) -> &[String] {
        &self.severe_terms
    }

    pub fn escalation_terms(&self) -> &[String] {
        &self.escalation_terms
    }

    pub fn category_rules(&self) -> &[CategoryRule] {
        &self.category_rules
    }

    /// Value of a spelled-out number, if known.
    pub fn number_word(&self, word: &str) -> Option<u32> {
        self.number_words
            .iter()
            .find(|n| n.word == word)
            .map(|n| n.value)
    }

    /// Canonical symptoms in vocabulary order, without duplicates.
    pub fn vocabulary(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for entry in &self.symptoms {
            if !names.contains(&entry.canonical.as_str()) {
                names.push(&entry.canonical);
            }
        }
        names
    }

    /// Resolves a recognized entity's surface text to a symptom entry.
    ///
    /// Exact keyword matches win; otherwise the first keyword (in table
    /// order) contained in the surface is used.
    pub fn canonical_for_surface(&self, surface: &str) -> Option<&SymptomEntry> {
        let surface = super::text::normalize(surface);
        self.symptoms
            .iter()
            .find(|s| s.keyword == surface)
            .or_else(|| {
                self.symptoms
                    .iter()
                    .find(|s| find_prefix(&surface, &s.keyword).is_some())
            })
    }

    /// Scans normalized text for symptom keywords.
    ///
    /// Mentions are ordered by where they first occur in the text, ties broken
    /// by table order, and de-duplicated by canonical name.
    pub fn scan_symptoms(&self, text: &str) -> Vec<SymptomMention> {
        let mut hits: Vec<(usize, usize, &SymptomEntry)> = self
            .symptoms
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| find_prefix(text, &entry.keyword).map(|pos| (pos, idx, entry)))
            .collect();
        hits.sort_by_key(|(pos, idx, _)| (*pos, *idx));

        let mut mentions: Vec<SymptomMention> = Vec::new();
        for (pos, _, entry) in hits {
            if mentions.iter().any(|m| m.symptom == entry.canonical) {
                continue;
            }
            let span = &text[pos..pos + entry.keyword.len()];
            mentions.push(SymptomMention::new(entry.canonical.clone(), span));
        }
        mentions
    }

    /// True if the text contains any symptom keyword.
    pub fn mentions_symptom(&self, text: &str) -> bool {
        self.symptoms
            .iter()
            .any(|s| find_prefix(text, &s.keyword).is_some())
    }

    /// First category whose rule matches the normalized text.
    pub fn match_category(&self, text: &str) -> Option<Category> {
        self.category_rules
            .iter()
            .find(|rule| {
                let keyword_hit = rule.keywords.iter().any(|k| find_word(text, k).is_some());
                keyword_hit || (rule.category == Category::Symptom && self.mentions_symptom(text))
            })
            .map(|rule| rule.category)
    }
}

fn symptom(keyword: &str, canonical: &str) -> SymptomEntry {
    SymptomEntry {
        keyword: keyword.to_string(),
        canonical: canonical.to_string(),
    }
}

fn duration(phrase: &str, days: u32) -> DurationPhrase {
    DurationPhrase {
        phrase: phrase.to_string(),
        days,
    }
}

fn rule(category: Category, keywords: &[&str]) -> CategoryRule {
    CategoryRule {
        category,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

fn terms(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        let number_words = ["one", "two", "three", "four", "five", "six", "seven"]
            .iter()
            .zip(1..)
            .map(|(word, value)| NumberWord {
                word: word.to_string(),
                value,
            })
            .collect();

        Self {
            symptoms: vec![
                symptom("fever", "fever"),
                symptom("temperature", "fever"),
                symptom("headache", "headache"),
                symptom("migraine", "headache"),
                symptom("cough", "cough"),
                symptom("sore throat", "sore throat"),
                symptom("throat", "sore throat"),
                symptom("cold", "cold"),
                symptom("runny nose", "cold"),
                symptom("sneez", "cold"),
                symptom("nausea", "nausea"),
                symptom("nauseous", "nausea"),
                symptom("stomach", "nausea"),
                symptom("vomit", "nausea"),
                symptom("fatigue", "fatigue"),
                symptom("tired", "fatigue"),
                symptom("exhausted", "fatigue"),
                symptom("dizz", "dizziness"),
                symptom("rash", "rash"),
                symptom("itch", "rash"),
                symptom("back pain", "back pain"),
                symptom("backache", "back pain"),
            ],
            durations: vec![
                duration("a week", 7),
                duration("since yesterday", 1),
                duration("yesterday", 1),
                duration("today", 0),
                duration("morning", 0),
            ],
            number_words,
            severe_terms: terms(&["severe", "bad", "terrible", "intense"]),
            escalation_terms: terms(&["getting worse", "worsening", "increasing"]),
            category_rules: vec![
                rule(
                    Category::Symptom,
                    &["symptom", "symptoms", "pain", "hurts", "ache", "sick", "unwell", "ill"],
                ),
                rule(
                    Category::Medication,
                    &["medicine", "medication", "medications", "pill", "pills", "tablet", "tablets", "dose", "dosage", "prescription"],
                ),
                rule(
                    Category::Appointment,
                    &["appointment", "book", "schedule", "see a doctor", "visit a doctor"],
                ),
                rule(
                    Category::Insurance,
                    &["insurance", "coverage", "covered", "claim", "policy"],
                ),
                rule(
                    Category::Advice,
                    &["advice", "recommend", "suggest", "what should i do", "tips"],
                ),
                rule(
                    Category::Info,
                    &["what is", "information", "info", "tell me about", "explain"],
                ),
                rule(Category::Thanks, &["thanks", "thank you", "thx", "cheers"]),
                rule(
                    Category::Goodbye,
                    &["bye", "goodbye", "see you", "good night", "farewell"],
                ),
                rule(
                    Category::Greeting,
                    &["hello", "hi", "hey", "good morning", "good afternoon", "good evening", "greetings"],
                ),
            ],
        }
    }
}
