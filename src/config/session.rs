//! Session store configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::adapters::{FileSessionStore, InMemorySessionStore};
use crate::ports::SessionStore;

use super::error::ValidationError;

/// Session store selection
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Which store backs dialogue state
    #[serde(default)]
    pub backend: SessionBackend,

    /// Directory for the file backend
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

/// Available session store backends
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    #[default]
    Memory,
    File,
}

impl SessionConfig {
    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == SessionBackend::File && self.directory.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("session.directory"));
        }
        Ok(())
    }

    /// Build the configured store
    pub fn build_store(&self) -> Arc<dyn SessionStore> {
        match self.backend {
            SessionBackend::Memory => Arc::new(InMemorySessionStore::new()),
            SessionBackend::File => Arc::new(FileSessionStore::new(&self.directory)),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: SessionBackend::default(),
            directory: default_directory(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("./data/sessions")
}
