//! NLP Capability Adapters
//!
//! - **WhitespaceTokenizer** - Default tokenizer
//! - **MockTextClassifier** / **MockEntityRecognizer** - Configurable test doubles
//!
//! The "unavailable" providers (`NoTextClassifier`, `NoEntityRecognizer`,
//! `NoTokenizer`) live with their ports.

mod mock_capabilities;
mod whitespace_tokenizer;

pub use mock_capabilities::{MockEntityRecognizer, MockTextClassifier};
pub use whitespace_tokenizer::WhitespaceTokenizer;
