//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `triage` - Classification, symptom extraction, detail parsing, advice

pub mod foundation;
pub mod triage;
