//! Classroom provider configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Classroom provider configuration (Google Classroom REST API)
#[derive(Debug, Clone, Deserialize)]
pub struct ClassroomConfig {
    /// OAuth access token; absent means the provider is unconfigured
    pub access_token: Option<String>,

    /// Base URL for the classroom API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ClassroomConfig {
    /// Whether credentials are present
    pub fn is_configured(&self) -> bool {
        self.access_token.as_deref().map_or(false, |t| !t.is_empty())
    }

    /// Validate classroom configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http") {
            return Err(ValidationError::InvalidStoreUrl);
        }
        Ok(())
    }
}

impl Default for ClassroomConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://classroom.googleapis.com".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_unconfigured() {
        let config = ClassroomConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.base_url, "https://classroom.googleapis.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_token_counts_as_unconfigured() {
        let config = ClassroomConfig {
            access_token: Some(String::new()),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn test_token_makes_it_configured() {
        let config = ClassroomConfig {
            access_token: Some("ya29.token".to_string()),
            ..Default::default()
        };
        assert!(config.is_configured());
    }
}
