//! Lexicon configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::triage::{Lexicon, LexiconError};

/// Where keyword tables come from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconConfig {
    /// YAML lexicon replacing the bundled one
    pub path: Option<PathBuf>,
}

impl LexiconConfig {
    /// Loads the configured lexicon, or the bundled one when no path is set
    pub fn load(&self) -> Result<Arc<Lexicon>, LexiconError> {
        match &self.path {
            Some(path) => Ok(Arc::new(Lexicon::load(path)?)),
            None => Ok(Lexicon::bundled()),
        }
    }
}
