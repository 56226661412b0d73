//! Tokenizer Port - splits text into tokens for the entity recognizer.

use super::CapabilityError;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, CapabilityError>;
}

/// Tokenizer used when no model is configured; callers split on whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTokenizer;

impl Tokenizer for NoTokenizer {
    fn tokenize(&self, _: &str) -> Result<Vec<String>, CapabilityError> {
        Err(CapabilityError::unavailable("tokenizer"))
    }
}
