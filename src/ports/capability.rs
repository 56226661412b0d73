//! Shared error type for injected NLP capabilities.

use thiserror::Error;

/// Why a capability call produced no usable result.
///
/// Every caller must handle both variants by taking its fallback path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// The capability is not configured or not loaded.
    #[error("Capability unavailable: {0}")]
    Unavailable(String),

    /// The capability was present but the call failed.
    #[error("Capability call failed: {0}")]
    Failed(String),
}

impl CapabilityError {
    pub fn unavailable(name: impl Into<String>) -> Self {
        CapabilityError::Unavailable(name.into())
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        CapabilityError::Failed(reason.into())
    }

    /// True for an expected absence rather than a malfunction.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, CapabilityError::Unavailable(_))
    }
}
