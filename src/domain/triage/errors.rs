//! Error types for the triage domain.

use thiserror::Error;

/// Errors raised while loading or validating a lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("Failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse lexicon: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Lexicon section '{0}' cannot be empty")]
    EmptySection(&'static str),

    #[error("Lexicon entry in '{section}' is blank")]
    BlankEntry { section: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_section_names_the_section() {
        let err = LexiconError::EmptySection("symptoms");
        assert_eq!(err.to_string(), "Lexicon section 'symptoms' cannot be empty");
    }

    #[test]
    fn blank_entry_names_the_section() {
        let err = LexiconError::BlankEntry { section: "durations" };
        assert!(err.to_string().contains("durations"));
    }
}
