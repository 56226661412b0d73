//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `HEALTH_ASSISTANT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use health_assistant::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Session backend: {:?}", config.session.backend);
//! ```

mod dialogue;
mod error;
mod lexicon;
mod logging;
mod session;

pub use dialogue::DialogueConfig;
pub use error::{ConfigError, ValidationError};
pub use lexicon::LexiconConfig;
pub use logging::LoggingConfig;
pub use session::{SessionBackend, SessionConfig};

use serde::Deserialize;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "HEALTH_ASSISTANT";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// in-memory assistant. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Dialogue thresholds and defaults
    #[serde(default)]
    pub dialogue: DialogueConfig,

    /// Optional lexicon override
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Session store backend
    #[serde(default)]
    pub session: SessionConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `HEALTH_ASSISTANT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `HEALTH_ASSISTANT__DIALOGUE__CONFIDENCE_THRESHOLD=0.6`
    /// - `HEALTH_ASSISTANT__SESSION__BACKEND=file`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.dialogue.validate()?;
        self.session.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
