//! Per-user dialogue state.
//!
//! A user is either idle or waiting for duration/severity details about one
//! symptom. The retry count starts at 1 when the prompt is first asked and
//! grows by one with each unparseable reply.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Slot-filling state for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DialogueState {
    /// No pending request.
    #[default]
    Idle,

    /// Waiting for details about `symptom`.
    AwaitingDetails { symptom: String, retry_count: u32 },
}

impl DialogueState {
    /// Opens a slot fill for `symptom` at the first attempt.
    pub fn awaiting(symptom: impl Into<String>) -> Self {
        DialogueState::AwaitingDetails {
            symptom: symptom.into(),
            retry_count: 1,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DialogueState::Idle)
    }

    /// The symptom being asked about, if any.
    pub fn pending_symptom(&self) -> Option<&str> {
        match self {
            DialogueState::Idle => None,
            DialogueState::AwaitingDetails { symptom, .. } => Some(symptom),
        }
    }

    pub fn retry_count(&self) -> Option<u32> {
        match self {
            DialogueState::Idle => None,
            DialogueState::AwaitingDetails { retry_count, .. } => Some(*retry_count),
        }
    }

    /// Rejects records that decode but cannot have been written by the dialogue.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            DialogueState::Idle => Ok(()),
            DialogueState::AwaitingDetails { symptom, retry_count } => {
                if symptom.trim().is_empty() {
                    return Err(ValidationError::empty_field("symptom"));
                }
                if *retry_count == 0 {
                    return Err(ValidationError::invalid_format(
                        "retry_count",
                        "must be at least 1",
                    ));
                }
                Ok(())
            }
        }
    }
}
