//! File-based Session Store Adapter
//!
//! Stores each user's dialogue state as a YAML file on disk. File names are
//! the SHA-256 digest of the user id, so any id maps to a safe name of fixed
//! length. The full id is kept inside the file and checked on read. Idle
//! users have no file.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::warn;

use crate::domain::foundation::UserId;
use crate::domain::triage::DialogueState;
use crate::ports::{SessionStore, SessionStoreError};

/// On-disk layout of one user's state file.
#[derive(Debug, Serialize, Deserialize)]
struct SessionRecord {
    user_id: UserId,
    dialogue: DialogueState,
}

/// File-based storage for dialogue state
///
/// Writes for one user are serialized by that user's lock; different users
/// never wait on each other. Reads take no lock since writes land by rename.
#[derive(Debug)]
pub struct FileSessionStore {
    base_path: PathBuf,
    user_locks: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl FileSessionStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// The directory is created on first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Path of the state file for a user
    pub fn state_file_path(&self, user_id: &UserId) -> PathBuf {
        self.base_path.join(format!("{}.yaml", file_stem(user_id)))
    }

    async fn user_lock(&self, user_id: &UserId) -> Arc<Mutex<()>> {
        let mut locks = self.user_locks.lock().await;
        Arc::clone(locks.entry(user_id.clone()).or_default())
    }

    async fn read_state(&self, user_id: &UserId) -> Result<DialogueState, SessionStoreError> {
        let path = self.state_file_path(user_id);
        let yaml = match fs::read_to_string(&path).await {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(DialogueState::Idle),
            Err(e) => return Err(SessionStoreError::Io(e.to_string())),
        };

        let record: SessionRecord =
            serde_yaml::from_str(&yaml).map_err(|e| SessionStoreError::Corrupted {
                user_id: user_id.clone(),
                reason: e.to_string(),
            })?;

        if &record.user_id != user_id {
            return Err(SessionStoreError::Corrupted {
                user_id: user_id.clone(),
                reason: format!("file holds state for user {}", record.user_id),
            });
        }

        Ok(record.dialogue)
    }

    async fn write_state(&self, user_id: &UserId, state: &DialogueState) -> Result<(), SessionStoreError> {
        let path = self.state_file_path(user_id);

        if state.is_idle() {
            return remove_if_exists(&path).await;
        }

        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SessionStoreError::Io(e.to_string()))?;

        let record = SessionRecord {
            user_id: user_id.clone(),
            dialogue: state.clone(),
        };
        let yaml = serde_yaml::to_string(&record)
            .map_err(|e| SessionStoreError::Serialization(e.to_string()))?;

        // Write then rename so readers never see a partial file
        let tmp = path.with_extension("yaml.tmp");
        fs::write(&tmp, yaml)
            .await
            .map_err(|e| SessionStoreError::Io(e.to_string()))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| SessionStoreError::Io(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, user_id: &UserId) -> Result<DialogueState, SessionStoreError> {
        self.read_state(user_id).await
    }

    async fn compare_and_swap(
        &self,
        user_id: &UserId,
        expected: &DialogueState,
        new: DialogueState,
    ) -> Result<bool, SessionStoreError> {
        let lock = self.user_lock(user_id).await;
        let _guard = lock.lock().await;

        let current = match self.read_state(user_id).await {
            Ok(state) => state,
            Err(SessionStoreError::Corrupted { reason, .. }) => {
                warn!(user_id = %user_id, reason = %reason, "Refusing swap over corrupted state");
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        if &current != expected {
            return Ok(false);
        }

        self.write_state(user_id, &new).await?;
        Ok(true)
    }

    async fn reset(&self, user_id: &UserId) -> Result<(), SessionStoreError> {
        let lock = self.user_lock(user_id).await;
        let _guard = lock.lock().await;
        remove_if_exists(&self.state_file_path(user_id)).await
    }
}

async fn remove_if_exists(path: &Path) -> Result<(), SessionStoreError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SessionStoreError::Io(e.to_string())),
    }
}

/// Hex SHA-256 of the user id.
fn file_stem(user_id: &UserId) -> String {
    let digest = Sha256::digest(user_id.as_str().as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[test]
    fn file_names_are_fixed_length_digests() {
        let store = FileSessionStore::new("/sessions");
        let short = store.state_file_path(&user("ab/"));
        let long = store.state_file_path(&user(&"u".repeat(200)));

        for path in [&short, &long] {
            let name = path.file_name().unwrap().to_str().unwrap();
            assert_eq!(name.len(), 64 + ".yaml".len());
            assert!(name.trim_end_matches(".yaml").chars().all(|c| c.is_ascii_hexdigit()));
        }
        assert_ne!(short, long);
        assert_eq!(short.parent().unwrap(), Path::new("/sessions"));
    }

    #[tokio::test]
    async fn missing_file_is_idle() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path());
        assert!(store.get(&user("alice")).await.unwrap().is_idle());
    }

    #[tokio::test]
    async fn long_user_ids_are_stored() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path());
        let long = user(&"u".repeat(200));

        assert!(store.get(&long).await.unwrap().is_idle());
        let swapped = store
            .compare_and_swap(&long, &DialogueState::Idle, DialogueState::awaiting("fever"))
            .await
            .unwrap();

        assert!(swapped);
        assert_eq!(store.get(&long).await.unwrap(), DialogueState::awaiting("fever"));
    }

    #[tokio::test]
    async fn state_file_records_the_full_user_id() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path());
        let alice = user("alice");
        store
            .compare_and_swap(&alice, &DialogueState::Idle, DialogueState::awaiting("cough"))
            .await
            .unwrap();

        let yaml = std::fs::read_to_string(store.state_file_path(&alice)).unwrap();
        assert!(yaml.contains("user_id: alice"));
    }

    #[tokio::test]
    async fn file_of_another_user_is_reported_as_corrupted() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path());
        let (alice, bob) = (user("alice"), user("bob"));
        store
            .compare_and_swap(&alice, &DialogueState::Idle, DialogueState::awaiting("cough"))
            .await
            .unwrap();
        std::fs::copy(store.state_file_path(&alice), store.state_file_path(&bob)).unwrap();

        let err = store.get(&bob).await.unwrap_err();
        assert!(err.is_corrupted());
    }

    #[tokio::test]
    async fn held_user_lock_does_not_block_other_users() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path());
        let (alice, bob) = (user("alice"), user("bob"));

        let alice_lock = store.user_lock(&alice).await;
        let _held = alice_lock.lock().await;

        let swapped = tokio::time::timeout(
            Duration::from_secs(5),
            store.compare_and_swap(&bob, &DialogueState::Idle, DialogueState::awaiting("rash")),
        )
        .await
        .expect("bob's swap waited on alice's lock")
        .unwrap();
        assert!(swapped);

        let read = tokio::time::timeout(Duration::from_secs(5), store.get(&alice))
            .await
            .expect("read waited on a write lock")
            .unwrap();
        assert!(read.is_idle());
    }

    #[tokio::test]
    async fn same_user_swaps_wait_for_the_lock() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path());
        let alice = user("alice");

        let alice_lock = store.user_lock(&alice).await;
        let held = alice_lock.lock().await;

        let pending = tokio::time::timeout(
            Duration::from_millis(50),
            store.compare_and_swap(&alice, &DialogueState::Idle, DialogueState::awaiting("rash")),
        )
        .await;
        assert!(pending.is_err());

        drop(held);
        assert!(store
            .compare_and_swap(&alice, &DialogueState::Idle, DialogueState::awaiting("rash"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn state_survives_a_new_store_instance() {
        let dir = TempDir::new().unwrap();
        let alice = user("alice");

        FileSessionStore::new(dir.path())
            .compare_and_swap(&alice, &DialogueState::Idle, DialogueState::awaiting("fever"))
            .await
            .unwrap();

        let reopened = FileSessionStore::new(dir.path());
        assert_eq!(reopened.get(&alice).await.unwrap(), DialogueState::awaiting("fever"));
    }

    #[tokio::test]
    async fn cas_mismatch_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path());
        let alice = user("alice");
        store
            .compare_and_swap(&alice, &DialogueState::Idle, DialogueState::awaiting("cough"))
            .await
            .unwrap();

        let swapped = store
            .compare_and_swap(&alice, &DialogueState::Idle, DialogueState::awaiting("rash"))
            .await
            .unwrap();

        assert!(!swapped);
        assert_eq!(store.get(&alice).await.unwrap(), DialogueState::awaiting("cough"));
    }

    #[tokio::test]
    async fn swapping_to_idle_deletes_the_file() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path());
        let alice = user("alice");
        store
            .compare_and_swap(&alice, &DialogueState::Idle, DialogueState::awaiting("cough"))
            .await
            .unwrap();

        store
            .compare_and_swap(&alice, &DialogueState::awaiting("cough"), DialogueState::Idle)
            .await
            .unwrap();

        assert!(!store.state_file_path(&alice).exists());
    }

    #[tokio::test]
    async fn garbage_file_is_reported_as_corrupted() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path());
        let alice = user("alice");
        std::fs::write(store.state_file_path(&alice), "state: [not a state").unwrap();

        let err = store.get(&alice).await.unwrap_err();
        assert!(err.is_corrupted());

        let swapped = store
            .compare_and_swap(&alice, &DialogueState::Idle, DialogueState::awaiting("fever"))
            .await
            .unwrap();
        assert!(!swapped);
    }

    #[tokio::test]
    async fn reset_clears_corrupted_state() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path());
        let alice = user("alice");
        std::fs::write(store.state_file_path(&alice), "state: awaiting_details\n").unwrap();

        store.reset(&alice).await.unwrap();

        assert!(store.get(&alice).await.unwrap().is_idle());
    }
}
