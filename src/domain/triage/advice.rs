//! Advice generator - maps a symptom and its details to a recommendation.

use super::values::{ParsedDetails, Severity};

/// Days at or beyond which a symptom is escalated to care.
pub const PROLONGED_DAYS: u32 = 3;

const SELF_CARE: &[(&str, &str)] = &[
    (
        "fever",
        "For a mild fever, rest, drink plenty of fluids, and consider an over-the-counter fever reducer. \
         See a doctor if it rises above 39°C or lasts more than a few days.",
    ),
    (
        "headache",
        "For a mild headache, rest in a quiet, dark room, stay hydrated, and consider an over-the-counter pain reliever.",
    ),
    (
        "cough",
        "For a mild cough, drink warm fluids, try honey with warm water, and avoid smoke or other irritants.",
    ),
    (
        "cold",
        "For a cold, rest, drink plenty of fluids, and use saline spray or steam for congestion.",
    ),
    (
        "sore throat",
        "For a sore throat, gargle with warm salt water, drink warm liquids, and rest your voice.",
    ),
    (
        "nausea",
        "For nausea, sip clear fluids slowly, eat small bland meals, and avoid greasy or spicy food.",
    ),
    (
        "fatigue",
        "For fatigue, aim for regular sleep, stay hydrated, eat balanced meals, and take short breaks during the day.",
    ),
    (
        "dizziness",
        "For dizziness, sit or lie down until it passes, stand up slowly, and drink some water.",
    ),
    (
        "rash",
        "For a mild rash, keep the area clean and dry, avoid scratching, and try a fragrance-free moisturizer.",
    ),
    (
        "back pain",
        "For mild back pain, stay gently active, use a warm compress, and avoid heavy lifting.",
    ),
];

/// Produces a deterministic recommendation for a canonical symptom.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdviceGenerator;

impl AdviceGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Escalates when the symptom is severe, prolonged or worsening;
    /// otherwise returns the symptom's self-care advice.
    pub fn advise(&self, symptom: &str, details: &ParsedDetails) -> String {
        let reasons = escalation_reasons(details);
        if !reasons.is_empty() {
            return format!(
                "Because your {symptom} {}, please seek medical care soon. \
                 If you have trouble breathing, chest pain, or confusion, contact emergency services.",
                join_reasons(&reasons)
            );
        }

        match self_care_template(symptom) {
            Some(template) => template.to_string(),
            None => format!(
                "For your {symptom}, rest, stay hydrated, and monitor how you feel. \
                 See a doctor if it gets worse or doesn't improve."
            ),
        }
    }

    /// True when `details` route to the escalate-to-care message.
    pub fn needs_escalation(&self, details: &ParsedDetails) -> bool {
        !escalation_reasons(details).is_empty()
    }
}

fn self_care_template(symptom: &str) -> Option<&'static str> {
    SELF_CARE
        .iter()
        .find(|(name, _)| *name == symptom)
        .map(|(_, template)| *template)
}

fn escalation_reasons(details: &ParsedDetails) -> Vec<String> {
    let mut reasons = Vec::new();
    if details.severity == Severity::Severe {
        reasons.push(format!("is {}", Severity::Severe));
    }
    if let Some(days) = details.days.filter(|d| *d >= PROLONGED_DAYS) {
        reasons.push(format!("has lasted {days} days"));
    }
    if details.escalating {
        reasons.push("is getting worse".to_string());
    }
    reasons
}

fn join_reasons(reasons: &[String]) -> String {
    match reasons {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}
