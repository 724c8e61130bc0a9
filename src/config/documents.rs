//! Document store configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Document blob + metadata store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentsConfig {
    /// Store base URL; absent means the documents capability is unconfigured
    pub base_url: Option<String>,

    /// Service key used for both REST and storage requests
    pub service_key: Option<String>,

    /// Metadata table name
    #[serde(default = "default_table")]
    pub table: String,

    /// Blob bucket name
    #[serde(default = "default_bucket")]
    pub bucket: String,
}

impl DocumentsConfig {
    /// Whether the store is reachable (URL and key present)
    pub fn is_configured(&self) -> bool {
        matches!(
            (&self.base_url, &self.service_key),
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty()
        )
    }

    /// Validate document store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = &self.base_url {
            if !url.is_empty() && !url.starts_with("http") {
                return Err(ValidationError::InvalidStoreUrl);
            }
        }
        Ok(())
    }
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            service_key: None,
            table: default_table(),
            bucket: default_bucket(),
        }
    }
}

fn default_table() -> String {
    "agent_documents".to_string()
}

fn default_bucket() -> String {
    "agent-files".to_string()
}
