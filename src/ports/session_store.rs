//! Session Store Port - per-user dialogue state with atomic updates.
//!
//! The dialogue manager reads a user's state, computes the next one and
//! writes it back with `compare_and_swap`, so two turns racing on the same
//! user cannot silently overwrite each other.

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::domain::triage::DialogueState;

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    /// The stored record exists but cannot be decoded.
    #[error("Stored state for user {user_id} is corrupted: {reason}")]
    Corrupted { user_id: UserId, reason: String },

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize state: {0}")]
    Serialization(String),

    #[error("State for user {0} changed concurrently")]
    Conflict(UserId),
}

impl SessionStoreError {
    pub fn is_corrupted(&self) -> bool {
        matches!(self, SessionStoreError::Corrupted { .. })
    }
}

/// Port for per-user dialogue state.
///
/// Users with no stored record are `DialogueState::Idle`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Current state for `user_id`.
    ///
    /// # Errors
    ///
    /// `SessionStoreError::Corrupted` if the record cannot be decoded.
    async fn get(&self, user_id: &UserId) -> Result<DialogueState, SessionStoreError>;

    /// Replaces the state with `new` only if it currently equals `expected`.
    ///
    /// Returns `false` and leaves the store unchanged on mismatch.
    /// A corrupted record never equals `expected`.
    async fn compare_and_swap(
        &self,
        user_id: &UserId,
        expected: &DialogueState,
        new: DialogueState,
    ) -> Result<bool, SessionStoreError>;

    /// Unconditionally returns the user to `Idle`, discarding any record.
    async fn reset(&self, user_id: &UserId) -> Result<(), SessionStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupted_error_names_user() {
        let err = SessionStoreError::Corrupted {
            user_id: UserId::new("alice").unwrap(),
            reason: "bad yaml".to_string(),
        };
        assert!(err.is_corrupted());
        assert!(err.to_string().contains("alice"));
    }

    #[test]
    fn io_error_is_not_corruption() {
        assert!(!SessionStoreError::Io("disk full".to_string()).is_corrupted());
    }
}
