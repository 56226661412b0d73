//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## NLP Capability Ports
//!
//! - `TextClassifier` - Category scoring for utterances
//! - `EntityRecognizer` - Entity spans over tokens, with adaptive-state reset
//! - `Tokenizer` - Text to tokens
//!
//! Each capability reports absence explicitly through `CapabilityError`, and
//! ships a `No*` provider for deployments without a model.
//!
//! ## State Ports
//!
//! - `SessionStore` - Per-user dialogue state with compare-and-swap

mod capability;
mod entity_recognizer;
mod session_store;
mod text_classifier;
mod tokenizer;

pub use capability::CapabilityError;
pub use entity_recognizer::{EntityRecognizer, EntitySpan, NoEntityRecognizer};
pub use session_store::{SessionStore, SessionStoreError};
pub use text_classifier::{ClassifierOutput, NoTextClassifier, TextClassifier};
pub use tokenizer::{NoTokenizer, Tokenizer};
