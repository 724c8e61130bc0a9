//! Chat completion provider configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Chat completion provider configuration (OpenAI REST API)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// API key (sk-...); absent means the provider is unconfigured
    pub api_key: Option<String>,

    /// Base URL for the chat completion API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model used for completions
    #[serde(default = "default_model")]
    pub model: String,
}

impl ChatConfig {
    /// Whether credentials are present
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().map_or(false, |k| !k.is_empty())
    }

    /// Validate chat configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(key) = &self.api_key {
            if !key.is_empty() && !key.starts_with("sk-") {
                return Err(ValidationError::InvalidChatKey);
            }
        }
        if self.model.is_empty() {
            return Err(ValidationError::MissingRequired("CHAT_MODEL"));
        }
        Ok(())
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_unconfigured() {
        let config = ChatConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.model, "gpt-4o-mini");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_key_prefix() {
        let config = ChatConfig {
            api_key: Some("re_xxx".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_requires_model() {
        let config = ChatConfig {
            model: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
