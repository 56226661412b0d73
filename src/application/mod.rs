//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    Capabilities, DialogueManager, DialogueSettings, RespondCommand, TurnKind, TurnOutcome,
    DEFAULT_MAX_DETAIL_ATTEMPTS, MAX_COMMIT_ATTEMPTS,
};
