//! Whitespace tokenizer - splits on whitespace and trims edge punctuation.

use crate::ports::{CapabilityError, Tokenizer};

#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, CapabilityError> {
        Ok(text
            .split_whitespace()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect())
    }
}
