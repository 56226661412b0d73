//! Command handlers.

pub mod dialogue;

pub use dialogue::{
    Capabilities, DialogueManager, DialogueSettings, RespondCommand, TurnKind, TurnOutcome,
    DEFAULT_MAX_DETAIL_ATTEMPTS, MAX_COMMIT_ATTEMPTS,
};
