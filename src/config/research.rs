//! Web research provider configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Web research provider configuration (Perplexity REST API)
#[derive(Debug, Clone, Deserialize)]
pub struct ResearchConfig {
    /// API key (pplx-...); absent means the provider is unconfigured
    pub api_key: Option<String>,

    /// Base URL for the research API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ResearchConfig {
    /// Whether credentials are present
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().map_or(false, |k| !k.is_empty())
    }

    /// Validate research configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(key) = &self.api_key {
            if !key.is_empty() && !key.starts_with("pplx-") {
                return Err(ValidationError::InvalidResearchKey);
            }
        }
        Ok(())
    }
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.perplexity.ai".to_string()
}
