//! DialogueManager - Handles one user turn end to end.
//!
//! Reads the user's dialogue state, decides the next state and reply, and
//! commits the transition with compare-and-swap. No error escapes: every
//! failure maps to a fixed reply.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::foundation::{UserId, ValidationError};
use crate::domain::triage::{
    templates, whitespace_tokens, AdviceGenerator, Category, DetailParser, DialogueState, Lexicon,
    SymptomExtractor, UtteranceClassifier, DEFAULT_CONFIDENCE_THRESHOLD,
};
use crate::ports::{CapabilityError, SessionStore, SessionStoreError};

use super::Capabilities;

/// Attempts at committing a turn before giving up on a contended user.
pub const MAX_COMMIT_ATTEMPTS: usize = 3;

/// Default number of detail prompts before falling back to generic advice.
pub const DEFAULT_MAX_DETAIL_ATTEMPTS: u32 = 2;

/// Tunable dialogue behaviour.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogueSettings {
    /// Model scores below this are treated as uncertain.
    pub confidence_threshold: f64,
    /// Detail prompts per symptom, counting the first.
    pub max_detail_attempts: u32,
    /// Used when a turn arrives without a user id.
    pub default_user_id: UserId,
}

impl Default for DialogueSettings {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            max_detail_attempts: DEFAULT_MAX_DETAIL_ATTEMPTS,
            default_user_id: UserId::default_user(),
        }
    }
}

/// Command to process one utterance.
#[derive(Debug, Clone)]
pub struct RespondCommand {
    /// Raw user id; blank selects the default user.
    pub user_id: String,
    pub text: String,
}

impl RespondCommand {
    pub fn new(user_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            text: text.into(),
        }
    }
}

/// Which branch of the dialogue produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnKind {
    EmptyInput,
    /// Fixed reply for a non-symptom category.
    CategoryReply(Category),
    /// Model was unsure and no keyword rule applied.
    Clarification,
    Unrecognized,
    SymptomPrompt,
    TellMeMore,
    Advice,
    Reprompt,
    RetryExhausted,
    /// Stored state was unusable and has been reset.
    Recovered,
    StoreUnavailable,
}

/// Result of a handled turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub reply: String,
    /// State after the turn; `None` when the store was not consulted or failed.
    pub state: Option<DialogueState>,
    pub kind: TurnKind,
}

struct Step {
    next: DialogueState,
    reply: String,
    kind: TurnKind,
}

impl Step {
    fn new(next: DialogueState, reply: impl Into<String>, kind: TurnKind) -> Self {
        Self {
            next,
            reply: reply.into(),
            kind,
        }
    }
}

/// Sole entry point of the health assistant.
pub struct DialogueManager {
    store: Arc<dyn SessionStore>,
    classifier: UtteranceClassifier,
    extractor: SymptomExtractor,
    parser: DetailParser,
    advisor: AdviceGenerator,
    capabilities: Capabilities,
    settings: DialogueSettings,
}

impl DialogueManager {
    pub fn new(
        store: Arc<dyn SessionStore>,
        lexicon: Arc<Lexicon>,
        capabilities: Capabilities,
        settings: DialogueSettings,
    ) -> Self {
        Self {
            store,
            classifier: UtteranceClassifier::new(
                Arc::clone(&capabilities.text_classifier),
                Arc::clone(&lexicon),
                settings.confidence_threshold,
            ),
            extractor: SymptomExtractor::new(
                Arc::clone(&capabilities.entity_recognizer),
                Arc::clone(&lexicon),
            ),
            parser: DetailParser::new(lexicon),
            advisor: AdviceGenerator::new(),
            capabilities,
            settings,
        }
    }

    /// Manager with the bundled lexicon, no models and default settings.
    pub fn with_store(store: Arc<dyn SessionStore>) -> Self {
        Self::new(
            store,
            Lexicon::bundled(),
            Capabilities::default(),
            DialogueSettings::default(),
        )
    }

    pub fn settings(&self) -> &DialogueSettings {
        &self.settings
    }

    /// Replies to `text` from `user_id`. Never fails.
    pub async fn respond(&self, text: &str, user_id: &str) -> String {
        self.handle(RespondCommand::new(user_id, text)).await.reply
    }

    /// Replies to `text` from the default user.
    pub async fn respond_default(&self, text: &str) -> String {
        self.respond(text, self.settings.default_user_id.as_str()).await
    }

    /// Processes one turn and reports the transition taken.
    pub async fn handle(&self, cmd: RespondCommand) -> TurnOutcome {
        let user_id = self.resolve_user(&cmd.user_id);

        if cmd.text.trim().is_empty() {
            debug!(user_id = %user_id, "Blank utterance");
            return TurnOutcome {
                reply: templates::EMPTY_INPUT.to_string(),
                state: None,
                kind: TurnKind::EmptyInput,
            };
        }

        for attempt in 1..=MAX_COMMIT_ATTEMPTS {
            let current = match self.store.get(&user_id).await {
                Ok(state) => state,
                Err(e) if e.is_corrupted() => return self.recover(&user_id, &e.to_string()).await,
                Err(e) => return store_unavailable(&user_id, &e),
            };

            if let Err(e) = current.validate() {
                return self.recover(&user_id, &invalid_state_reason(&e)).await;
            }

            let step = self.step(&current, &cmd.text);

            if step.next == current {
                return finish(&user_id, step);
            }

            match self
                .store
                .compare_and_swap(&user_id, &current, step.next.clone())
                .await
            {
                Ok(true) => return finish(&user_id, step),
                Ok(false) => {
                    warn!(user_id = %user_id, attempt, "Dialogue state changed concurrently, retrying turn");
                }
                Err(e) if e.is_corrupted() => return self.recover(&user_id, &e.to_string()).await,
                Err(e) => return store_unavailable(&user_id, &e),
            }
        }

        store_unavailable(&user_id, &SessionStoreError::Conflict(user_id.clone()))
    }

    fn resolve_user(&self, raw: &str) -> UserId {
        UserId::new(raw).unwrap_or_else(|_| self.settings.default_user_id.clone())
    }

    fn step(&self, current: &DialogueState, text: &str) -> Step {
        match current {
            DialogueState::AwaitingDetails {
                symptom,
                retry_count,
            } => self.step_awaiting(symptom, *retry_count, text),
            DialogueState::Idle => self.step_idle(text),
        }
    }

    fn step_awaiting(&self, symptom: &str, retry_count: u32, text: &str) -> Step {
        let details = self.parser.parse(text);

        if details.has_duration() {
            return Step::new(
                DialogueState::Idle,
                self.advisor.advise(symptom, &details),
                TurnKind::Advice,
            );
        }

        if retry_count < self.settings.max_detail_attempts {
            return Step::new(
                DialogueState::AwaitingDetails {
                    symptom: symptom.to_string(),
                    retry_count: retry_count.saturating_add(1),
                },
                templates::reprompt(symptom),
                TurnKind::Reprompt,
            );
        }

        Step::new(
            DialogueState::Idle,
            templates::RETRY_EXHAUSTED,
            TurnKind::RetryExhausted,
        )
    }

    fn step_idle(&self, text: &str) -> Step {
        let classification = self.classifier.classify(text);

        if classification.is_uncertain_model_result(self.settings.confidence_threshold) {
            return Step::new(
                DialogueState::Idle,
                templates::CLARIFICATION,
                TurnKind::Clarification,
            );
        }

        match classification.category {
            Category::Symptom => self.step_symptom(text),
            Category::Unknown => Step::new(
                DialogueState::Idle,
                templates::UNRECOGNIZED,
                TurnKind::Unrecognized,
            ),
            category => match templates::category_reply(category) {
                Some(reply) => Step::new(
                    DialogueState::Idle,
                    reply,
                    TurnKind::CategoryReply(category),
                ),
                None => Step::new(
                    DialogueState::Idle,
                    templates::UNRECOGNIZED,
                    TurnKind::Unrecognized,
                ),
            },
        }
    }

    fn step_symptom(&self, text: &str) -> Step {
        let tokens = self.tokenize(text);
        let mentions = self.extractor.extract(text, &tokens);

        let Some(primary) = mentions.first() else {
            return Step::new(DialogueState::Idle, templates::TELL_ME_MORE, TurnKind::TellMeMore);
        };

        let names: Vec<&str> = mentions.iter().map(|m| m.symptom.as_str()).collect();
        Step::new(
            DialogueState::awaiting(primary.symptom.clone()),
            templates::symptom_prompt(&primary.symptom, &names),
            TurnKind::SymptomPrompt,
        )
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        match self.capabilities.tokenizer.tokenize(text) {
            Ok(tokens) => tokens,
            Err(CapabilityError::Unavailable(_)) => whitespace_tokens(text),
            Err(err @ CapabilityError::Failed(_)) => {
                warn!(error = %err, "Tokenizer failed, splitting on whitespace");
                whitespace_tokens(text)
            }
        }
    }

    async fn recover(&self, user_id: &UserId, reason: &str) -> TurnOutcome {
        warn!(user_id = %user_id, reason = %reason, "Discarding unusable dialogue state");

        if let Err(e) = self.store.reset(user_id).await {
            return store_unavailable(user_id, &e);
        }

        TurnOutcome {
            reply: templates::RECOVERY.to_string(),
            state: Some(DialogueState::Idle),
            kind: TurnKind::Recovered,
        }
    }
}

impl std::fmt::Debug for DialogueManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogueManager")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

fn finish(user_id: &UserId, step: Step) -> TurnOutcome {
    debug!(user_id = %user_id, kind = ?step.kind, "Turn handled");
    TurnOutcome {
        reply: step.reply,
        state: Some(step.next),
        kind: step.kind,
    }
}

fn store_unavailable(user_id: &UserId, error: &SessionStoreError) -> TurnOutcome {
    warn!(user_id = %user_id, error = %error, "Session store unavailable");
    TurnOutcome {
        reply: templates::TEMPORARILY_UNAVAILABLE.to_string(),
        state: None,
        kind: TurnKind::StoreUnavailable,
    }
}

fn invalid_state_reason(error: &ValidationError) -> String {
    format!("invalid stored state: {error}")
}
