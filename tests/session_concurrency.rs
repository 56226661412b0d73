//! Concurrent turns against a shared session store.

use std::sync::Arc;

use health_assistant::adapters::InMemorySessionStore;
use health_assistant::application::DialogueManager;
use health_assistant::domain::foundation::UserId;
use health_assistant::domain::triage::DialogueState;
use health_assistant::ports::SessionStore;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn different_users_progress_independently() {
    let store = Arc::new(InMemorySessionStore::new());
    let manager = Arc::new(DialogueManager::with_store(store.clone()));

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let manager = Arc::clone(&manager);
            tokio::spawn(async move {
                let user = format!("user-{i}");
                manager.respond("I have a cough", &user).await;
                if i % 2 == 0 {
                    manager.respond("2 days", &user).await;
                }
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    for i in 0..32 {
        let state = store.get(&UserId::new(format!("user-{i}")).unwrap()).await.unwrap();
        if i % 2 == 0 {
            assert_eq!(state, DialogueState::Idle);
        } else {
            assert_eq!(state, DialogueState::awaiting("cough"));
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_turns_for_one_user_leave_valid_state() {
    let store = Arc::new(InMemorySessionStore::new());
    let manager = Arc::new(DialogueManager::with_store(store.clone()));
    let user = UserId::new("shared").unwrap();

    manager.respond("I have a headache", user.as_str()).await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let manager = Arc::clone(&manager);
            tokio::spawn(async move { manager.respond("not sure", "shared").await })
        })
        .collect();

    let mut replies = Vec::new();
    for handle in handles {
        replies.push(handle.await.unwrap());
    }

    assert!(replies.iter().all(|r| !r.is_empty()));
    let state = store.get(&user).await.unwrap();
    assert!(state.validate().is_ok());
    if let Some(retry) = state.retry_count() {
        assert!(retry <= 2);
    }
}
