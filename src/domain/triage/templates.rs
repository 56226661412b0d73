//! Fixed reply wording used by the dialogue.

use super::values::Category;

pub const EMPTY_INPUT: &str = "Please say something so I can help.";

pub const CLARIFICATION: &str =
    "I'm not quite sure what you mean. Could you rephrase that, or tell me about any symptoms you have?";

pub const UNRECOGNIZED: &str =
    "I'm sorry, I didn't understand. You can tell me about a symptom, or ask about medication, appointments or insurance.";

pub const TELL_ME_MORE: &str = "Tell me more about your symptoms.";

pub const RECOVERY: &str =
    "Sorry, I lost track of our conversation. Could you tell me again what symptoms you have?";

pub const TEMPORARILY_UNAVAILABLE: &str =
    "Sorry, I'm temporarily unable to continue our conversation. Please try again in a moment.";

pub const RETRY_EXHAUSTED: &str =
    "I couldn't work out how long you've had it. In general, rest, stay hydrated, and monitor your symptoms. \
     If they get worse or don't improve, please see a doctor.";

/// Fixed reply for categories that do not open a slot fill.
pub fn category_reply(category: Category) -> Option<&'static str> {
    let reply = match category {
        Category::Greeting => "Hello! I'm your health assistant. How can I help you today?",
        Category::Thanks => "You're welcome! Is there anything else I can help with?",
        Category::Goodbye => "Take care! I hope you feel better soon.",
        Category::Medication => {
            "Please take medication only as prescribed or as directed on the label. \
             Your pharmacist or doctor can answer questions about doses and interactions."
        }
        Category::Advice => {
            "If your symptoms persist or get worse, please consult a healthcare professional. \
             Tell me about a symptom and I can give more specific advice."
        }
        Category::Appointment => {
            "To book an appointment, please contact your clinic or use your provider's booking service."
        }
        Category::Insurance => {
            "For questions about coverage or claims, please contact your insurance provider directly."
        }
        Category::Info => {
            "I can share general health information. Tell me which symptom or condition you'd like to know about."
        }
        Category::Symptom | Category::Unknown => return None,
    };
    Some(reply)
}

/// Asks for duration and severity of the primary symptom.
///
/// When several symptoms were mentioned, a note lists all of them.
pub fn symptom_prompt(primary: &str, all: &[&str]) -> String {
    let mut prompt = format!(
        "I see you mentioned {primary}. How many days have you had it, and how severe is it?"
    );
    if all.len() > 1 {
        prompt.push_str(&format!(
            " I also noticed you mentioned: {}. Let's start with the {primary}.",
            all.join(", ")
        ));
    }
    prompt
}

pub fn reprompt(symptom: &str) -> String {
    format!(
        "Sorry, I didn't catch how long you've had the {symptom}. \
         How many days has it been (for example \"2 days\" or \"since yesterday\")?"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fixed_category_has_a_reply() {
        for category in [
            Category::Greeting,
            Category::Thanks,
            Category::Goodbye,
            Category::Medication,
            Category::Advice,
            Category::Appointment,
            Category::Insurance,
            Category::Info,
        ] {
            assert!(category_reply(category).is_some(), "{category} has no reply");
        }
        assert!(category_reply(Category::Symptom).is_none());
        assert!(category_reply(Category::Unknown).is_none());
    }

    #[test]
    fn single_symptom_prompt_has_no_note() {
        let prompt = symptom_prompt("fever", &["fever"]);
        assert!(prompt.contains("fever"));
        assert!(!prompt.contains("also noticed"));
    }

    #[test]
    fn multiple_symptoms_are_listed() {
        let prompt = symptom_prompt("cough", &["cough", "headache"]);
        assert!(prompt.starts_with("I see you mentioned cough."));
        assert!(prompt.contains("cough, headache"));
    }

    #[test]
    fn mass_noun_symptoms_read_without_an_article() {
        for symptom in ["back pain", "nausea", "fatigue", "dizziness"] {
            let prompt = symptom_prompt(symptom, &[symptom]);
            assert!(prompt.starts_with(&format!("I see you mentioned {symptom}.")));
            assert!(!prompt.contains(&format!(" a {symptom}")));
        }
    }

    #[test]
    fn reprompt_names_the_symptom() {
        assert!(reprompt("headache").contains("headache"));
    }
}
