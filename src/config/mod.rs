//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `SWITCHBOARD` prefix and nested values use double
//! underscores as separators.
//!
//! Provider credentials are optional at load time: an unconfigured
//! provider stays routable and fails individual dispatches with a
//! credentials error, which the capability prober reads as unavailable.
//!
//! # Example
//!
//! ```no_run
//! use switchboard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod chat;
mod classroom;
mod documents;
mod email;
mod error;
mod research;
mod server;
mod voice;

pub use chat::ChatConfig;
pub use classroom::ClassroomConfig;
pub use documents::DocumentsConfig;
pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use research::ResearchConfig;
pub use server::{Environment, ServerConfig};
pub use voice::VoiceConfig;

use serde::Deserialize;

use crate::domain::Provider;

/// Root application configuration
///
/// Contains all configuration sections for the Switchboard gateway.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Classroom provider configuration
    #[serde(default)]
    pub classroom: ClassroomConfig,

    /// Voice call provider configuration
    #[serde(default)]
    pub voice: VoiceConfig,

    /// Email provider configuration
    #[serde(default)]
    pub email: EmailConfig,

    /// Web research provider configuration
    #[serde(default)]
    pub research: ResearchConfig,

    /// Chat completion provider configuration
    #[serde(default)]
    pub chat: ChatConfig,

    /// Document store configuration
    #[serde(default)]
    pub documents: DocumentsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SWITCHBOARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SWITCHBOARD__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SWITCHBOARD__EMAIL__API_KEY=re_...` -> `email.api_key = re_...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SWITCHBOARD")
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
        self.server.validate()?;
        self.classroom.validate()?;
        self.voice.validate()?;
        self.email.validate()?;
        self.research.validate()?;
        self.chat.validate()?;
        self.documents.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Providers whose credentials are present, for startup logging.
    pub fn configured_providers(&self) -> Vec<Provider> {
        let mut configured = Vec::new();
        if self.classroom.is_configured() {
            configured.push(Provider::Classroom);
        }
        if self.voice.is_configured() {
            configured.push(Provider::VoiceCall);
        }
        if self.email.is_configured() {
            configured.push(Provider::Email);
        }
        if self.research.is_configured() {
            configured.push(Provider::WebResearch);
        }
        if self.chat.is_configured() {
            configured.push(Provider::Chat);
        }
        if self.documents.is_configured() {
            configured.push(Provider::Documents);
        }
        configured
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_env() {
        env::set_var("SWITCHBOARD__EMAIL__API_KEY", "re_test_key");
        env::set_var("SWITCHBOARD__CHAT__API_KEY", "sk-test");
        env::set_var("SWITCHBOARD__SERVER__PORT", "3000");
    }

    fn clear_env() {
        env::remove_var("SWITCHBOARD__EMAIL__API_KEY");
        env::remove_var("SWITCHBOARD__CHAT__API_KEY");
        env::remove_var("SWITCHBOARD__SERVER__PORT");
        env::remove_var("SWITCHBOARD__SERVER__ENVIRONMENT");
    }

    #[test]
    fn test_load_with_no_provider_credentials() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(config.validate().is_ok());
        assert!(config.configured_providers().is_empty());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.email.api_key.as_deref(), Some("re_test_key"));
        assert_eq!(config.server.port, 3000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_configured_providers_tracks_credentials() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_env();
        let config = AppConfig::load().unwrap();
        clear_env();

        let configured = config.configured_providers();
        assert!(configured.contains(&Provider::Email));
        assert!(configured.contains(&Provider::Chat));
        assert!(!configured.contains(&Provider::VoiceCall));
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SWITCHBOARD__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }
}
