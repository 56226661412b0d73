//! In-Memory Session Store Adapter
//!
//! Keeps dialogue state in a process-wide map. State lives for the lifetime
//! of the process; users with no entry are idle.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::UserId;
use crate::domain::triage::DialogueState;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage for dialogue state
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    states: Arc<RwLock<HashMap<UserId, DialogueState>>>,
}

impl InMemorySessionStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites a user's state without comparison (useful for tests)
    pub async fn put(&self, user_id: UserId, state: DialogueState) {
        self.states.write().await.insert(user_id, state);
    }

    /// Clear all stored state
    pub async fn clear(&self) {
        self.states.write().await.clear();
    }

    /// Number of users with a non-idle state
    pub async fn pending_count(&self) -> usize {
        self.states.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: &UserId) -> Result<DialogueState, SessionStoreError> {
        let states = self.states.read().await;
        Ok(states.get(user_id).cloned().unwrap_or_default())
    }

    async fn compare_and_swap(
        &self,
        user_id: &UserId,
        expected: &DialogueState,
        new: DialogueState,
    ) -> Result<bool, SessionStoreError> {
        let mut states = self.states.write().await;
        let current = states.get(user_id).cloned().unwrap_or_default();
        if &current != expected {
            return Ok(false);
        }

        if new.is_idle() {
            states.remove(user_id);
        } else {
            states.insert(user_id.clone(), new);
        }
        Ok(true)
    }

    async fn reset(&self, user_id: &UserId) -> Result<(), SessionStoreError> {
        self.states.write().await.remove(user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[tokio::test]
    async fn unknown_user_is_idle() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.get(&user("alice")).await.unwrap(), DialogueState::Idle);
    }

    #[tokio::test]
    async fn cas_succeeds_when_expected_matches() {
        let store = InMemorySessionStore::new();
        let alice = user("alice");

        let swapped = store
            .compare_and_swap(&alice, &DialogueState::Idle, DialogueState::awaiting("fever"))
            .await
            .unwrap();

        assert!(swapped);
        assert_eq!(store.get(&alice).await.unwrap(), DialogueState::awaiting("fever"));
    }

    #[tokio::test]
    async fn cas_fails_on_mismatch_and_leaves_state() {
        let store = InMemorySessionStore::new();
        let alice = user("alice");
        store.put(alice.clone(), DialogueState::awaiting("cough")).await;

        let swapped = store
            .compare_and_swap(&alice, &DialogueState::Idle, DialogueState::awaiting("fever"))
            .await
            .unwrap();

        assert!(!swapped);
        assert_eq!(store.get(&alice).await.unwrap(), DialogueState::awaiting("cough"));
    }

    #[tokio::test]
    async fn swapping_to_idle_removes_entry() {
        let store = InMemorySessionStore::new();
        let alice = user("alice");
        store.put(alice.clone(), DialogueState::awaiting("cough")).await;

        store
            .compare_and_swap(&alice, &DialogueState::awaiting("cough"), DialogueState::Idle)
            .await
            .unwrap();

        assert_eq!(store.pending_count().await, 0);
    }

    #[tokio::test]
    async fn users_are_independent() {
        let store = InMemorySessionStore::new();
        store.put(user("alice"), DialogueState::awaiting("rash")).await;
        assert!(store.get(&user("bob")).await.unwrap().is_idle());
    }

    #[tokio::test]
    async fn reset_returns_user_to_idle() {
        let store = InMemorySessionStore::new();
        let alice = user("alice");
        store.put(alice.clone(), DialogueState::awaiting("rash")).await;

        store.reset(&alice).await.unwrap();

        assert!(store.get(&alice).await.unwrap().is_idle());
    }
}
