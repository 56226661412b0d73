//! Entity Recognizer Port - finds candidate entity spans in token sequences.

use super::CapabilityError;

/// Half-open token range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
}

impl EntitySpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// True when the span is non-empty and lies within `len` tokens.
    pub fn fits(&self, len: usize) -> bool {
        self.start < self.end && self.end <= len
    }
}

/// Port for a named-entity recognizer.
///
/// Recognizers may keep adaptive per-document memory. Callers invoke
/// [`reset`](EntityRecognizer::reset) after each [`find`](EntityRecognizer::find)
/// so that results do not depend on earlier calls.
pub trait EntityRecognizer: Send + Sync {
    fn find(&self, tokens: &[String]) -> Result<Vec<EntitySpan>, CapabilityError>;

    /// Clears adaptive state accumulated by previous calls.
    fn reset(&self);
}

/// Recognizer used when no model is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEntityRecognizer;

impl EntityRecognizer for NoEntityRecognizer {
    fn find(&self, _: &[String]) -> Result<Vec<EntitySpan>, CapabilityError> {
        Err(CapabilityError::unavailable("entity recognizer"))
    }

    fn reset(&self) {}
}
