//! Application configuration module
//!
//! Configuration is read from environment variables with the `COURSE_RAG`
//! prefix using the `config` and `dotenvy` crates. Nested values are separated
//! by a double underscore.
//!
//! # Example
//!
//! ```no_run
//! use course_rag::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Catalog at {}", config.catalog.path.display());
//! ```

mod ai;
mod catalog;
mod error;
mod server;
mod session;

pub use ai::{AiConfig, MAX_RETRIES};
pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use server::ServerConfig;
pub use session::SessionConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment deserializes; only
/// [`AppConfig::validate`] insists on the API key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (Anthropic)
    #[serde(default)]
    pub ai: AiConfig,

    /// Course catalog location and search limits
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Conversation history limits
    #[serde(default)]
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads variables with the `COURSE_RAG`
    /// prefix.
    ///
    /// # Environment Variable Format
    ///
    /// - `COURSE_RAG__SERVER__PORT=8000` -> `server.port = 8000`
    /// - `COURSE_RAG__AI__ANTHROPIC_API_KEY=...` -> `ai.anthropic_api_key = ...`
    /// - `COURSE_RAG__CATALOG__PATH=docs/catalog.yaml` -> `catalog.path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COURSE_RAG")
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
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.catalog.validate()?;
        self.session.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "COURSE_RAG__AI__ANTHROPIC_API_KEY",
        "COURSE_RAG__AI__MAX_TOOL_ROUNDS",
        "COURSE_RAG__SERVER__PORT",
        "COURSE_RAG__SERVER__HOST",
        "COURSE_RAG__CATALOG__PATH",
        "COURSE_RAG__CATALOG__MAX_RESULTS",
        "COURSE_RAG__SESSION__MAX_HISTORY",
    ];

    fn set_minimal_env() {
        env::set_var("COURSE_RAG__AI__ANTHROPIC_API_KEY", "sk-ant-test");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_minimal_env();

        let config = AppConfig::load().expect("Failed to load config");
        assert!(config.ai.has_anthropic());

        clear_env();
    }

    #[test]
    fn test_validate_minimal_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_minimal_env();

        let config = AppConfig::load().expect("Failed to load config");
        assert!(config.validate().is_ok());

        clear_env();
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load().expect("Failed to load config");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.ai.max_tool_rounds, 2);
        assert_eq!(config.catalog.max_results, 5);
        assert_eq!(config.session.max_history, 2);
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("ANTHROPIC_API_KEY"))
        );
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_minimal_env();
        env::set_var("COURSE_RAG__SERVER__PORT", "9000");
        env::set_var("COURSE_RAG__CATALOG__MAX_RESULTS", "3");
        env::set_var("COURSE_RAG__SESSION__MAX_HISTORY", "4");

        let config = AppConfig::load().expect("Failed to load config");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.catalog.max_results, 3);
        assert_eq!(config.session.max_history, 4);

        clear_env();
    }

    #[test]
    fn test_zero_rounds_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_minimal_env();
        env::set_var("COURSE_RAG__AI__MAX_TOOL_ROUNDS", "0");

        let config = AppConfig::load().expect("Failed to load config");
        assert_eq!(
            config.validate(),
            Err(ValidationError::MustBePositive("max_tool_rounds"))
        );

        clear_env();
    }
}
