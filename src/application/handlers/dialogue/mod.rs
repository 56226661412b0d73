//! Dialogue handlers.

mod capabilities;
mod dialogue_manager;

pub use capabilities::Capabilities;
pub use dialogue_manager::{
    DialogueManager, DialogueSettings, RespondCommand, TurnKind, TurnOutcome,
    DEFAULT_MAX_DETAIL_ATTEMPTS, MAX_COMMIT_ATTEMPTS,
};
