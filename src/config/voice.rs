//! Voice call provider configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Voice call provider configuration (Twilio REST API)
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceConfig {
    /// Account SID (AC...)
    pub account_sid: Option<String>,

    /// Auth token paired with the account SID
    pub auth_token: Option<String>,

    /// Caller id number in E.164 form
    pub from_number: Option<String>,

    /// Base URL for the voice API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl VoiceConfig {
    /// Whether credentials are present
    pub fn is_configured(&self) -> bool {
        matches!(
            (&self.account_sid, &self.auth_token),
            (Some(sid), Some(token)) if !sid.is_empty() && !token.is_empty()
        )
    }

    /// Validate voice configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(sid) = &self.account_sid {
            if !sid.is_empty() && !sid.starts_with("AC") {
                return Err(ValidationError::InvalidAccountSid);
            }
        }
        if self.is_configured() && self.from_number.as_deref().map_or(true, str::is_empty) {
            return Err(ValidationError::MissingFromNumber);
        }
        Ok(())
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            account_sid: None,
            auth_token: None,
            from_number: None,
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.twilio.com".to_string()
}
