//! Property tests for the dialogue and its components.

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

use health_assistant::adapters::InMemorySessionStore;
use health_assistant::application::DialogueManager;
use health_assistant::domain::foundation::UserId;
use health_assistant::domain::triage::{
    whitespace_tokens, DetailParser, DialogueState, Lexicon, SymptomExtractor,
    UtteranceClassifier, DEFAULT_CONFIDENCE_THRESHOLD,
};
use health_assistant::ports::{NoEntityRecognizer, NoTextClassifier, SessionStore};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn respond_always_replies(inputs in prop::collection::vec(".{0,60}", 1..6)) {
        let rt = runtime();
        let store = Arc::new(InMemorySessionStore::new());
        let manager = DialogueManager::with_store(store.clone());

        rt.block_on(async {
            for input in &inputs {
                let reply = manager.respond(input, "prop").await;
                prop_assert!(!reply.is_empty());
            }
            let state = store.get(&UserId::new("prop").unwrap()).await.unwrap();
            prop_assert!(state.validate().is_ok());
            Ok(())
        })?;
    }

    #[test]
    fn components_are_idempotent(text in "[a-zA-Z0-9 ,.']{1,80}") {
        let lexicon = Lexicon::bundled();
        let classifier = UtteranceClassifier::new(
            Arc::new(NoTextClassifier),
            lexicon.clone(),
            DEFAULT_CONFIDENCE_THRESHOLD,
        );
        let extractor = SymptomExtractor::new(Arc::new(NoEntityRecognizer), lexicon.clone());
        let parser = DetailParser::new(lexicon);
        let tokens = whitespace_tokens(&text);

        prop_assert_eq!(classifier.classify(&text), classifier.classify(&text));
        prop_assert_eq!(extractor.extract(&text, &tokens), extractor.extract(&text, &tokens));
        prop_assert_eq!(parser.parse(&text), parser.parse(&text));
    }

    #[test]
    fn symptom_turns_never_prompt_a_third_time(
        symptom in prop::sample::select(vec!["fever", "cough", "rash", "headache"]),
        filler in "[x-z]{1,10}( [x-z]{1,10})?",
    ) {
        let rt = runtime();
        let store = Arc::new(InMemorySessionStore::new());
        let manager = DialogueManager::with_store(store.clone());
        let user = UserId::new("prop").unwrap();

        rt.block_on(async {
            manager.respond(&format!("I have a {symptom}"), "prop").await;
            prop_assert_eq!(store.get(&user).await.unwrap(), DialogueState::awaiting(symptom));

            manager.respond(&filler, "prop").await;
            manager.respond(&filler, "prop").await;
            prop_assert_eq!(store.get(&user).await.unwrap(), DialogueState::Idle);
            Ok(())
        })?;
    }

    #[test]
    fn mention_order_is_stable(words in prop::collection::vec(
        prop::sample::select(vec!["cough", "fever", "rash", "tired", "and", "a", "the"]),
        1..10,
    )) {
        let text = words.join(" ");
        let lexicon = Lexicon::bundled();
        let first = lexicon.scan_symptoms(&text);
        let second = lexicon.scan_symptoms(&text);
        prop_assert_eq!(&first, &second);

        let unique: HashSet<&str> = first.iter().map(|m| m.symptom.as_str()).collect();
        prop_assert_eq!(unique.len(), first.len());
    }
}
