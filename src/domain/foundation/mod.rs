//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the health assistant domain.

mod confidence;
mod errors;
mod ids;

pub use confidence::Confidence;
pub use errors::ValidationError;
pub use ids::{UserId, DEFAULT_USER_ID};
