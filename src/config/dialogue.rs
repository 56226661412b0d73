//! Dialogue configuration

use serde::Deserialize;

use crate::application::{DialogueSettings, DEFAULT_MAX_DETAIL_ATTEMPTS};
use crate::domain::foundation::{UserId, DEFAULT_USER_ID};
use crate::domain::triage::DEFAULT_CONFIDENCE_THRESHOLD;

use super::error::ValidationError;

/// Dialogue behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct DialogueConfig {
    /// Model scores below this trigger keyword rules or a clarification
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,

    /// Detail prompts per symptom before the generic fallback
    #[serde(default = "default_max_detail_attempts")]
    pub max_detail_attempts: u32,

    /// User id for turns that arrive without one
    #[serde(default = "default_user_id")]
    pub default_user_id: String,
}

impl DialogueConfig {
    /// Validate dialogue configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(ValidationError::InvalidConfidenceThreshold(
                self.confidence_threshold,
            ));
        }
        if self.max_detail_attempts == 0 {
            return Err(ValidationError::InvalidDetailAttempts);
        }
        if self.default_user_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("dialogue.default_user_id"));
        }
        Ok(())
    }

    /// Settings for the dialogue manager
    pub fn settings(&self) -> Result<DialogueSettings, ValidationError> {
        self.validate()?;
        let default_user_id = UserId::new(self.default_user_id.as_str())
            .map_err(|_| ValidationError::MissingRequired("dialogue.default_user_id"))?;

        Ok(DialogueSettings {
            confidence_threshold: self.confidence_threshold,
            max_detail_attempts: self.max_detail_attempts,
            default_user_id,
        })
    }
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            max_detail_attempts: default_max_detail_attempts(),
            default_user_id: default_user_id(),
        }
    }
}

fn default_confidence_threshold() -> f64 {
    DEFAULT_CONFIDENCE_THRESHOLD
}

fn default_max_detail_attempts() -> u32 {
    DEFAULT_MAX_DETAIL_ATTEMPTS
}

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}
