//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `session` - Session store implementations (in-memory, file)
//! - `nlp` - Tokenizer and mock NLP capabilities

pub mod nlp;
pub mod session;

pub use nlp::{MockEntityRecognizer, MockTextClassifier, WhitespaceTokenizer};
pub use session::{FileSessionStore, InMemorySessionStore};
