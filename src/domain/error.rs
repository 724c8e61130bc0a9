//! Gateway error taxonomy.
//!
//! Every failure surfaced by the router or a provider handler is one of
//! these variants; all of them are converted to the normalized envelope
//! at the router boundary and never propagate past it.

use thiserror::Error;

use super::provider::Provider;

/// Errors produced while routing or executing a provider action.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The request named a provider outside the known set.
    #[error("Unknown provider '{0}'")]
    UnknownProvider(String),

    /// The action is not registered under the provider's action table.
    #[error("Unknown action '{action}' for provider '{provider}'")]
    UnknownAction { provider: Provider, action: String },

    /// The payload is missing required field(s).
    #[error("Missing required field(s): {}", missing.join(", "))]
    InvalidPayload { missing: Vec<String> },

    /// A provider credential is absent from the environment.
    ///
    /// The message deliberately contains the word "credentials": the
    /// capability prober keys on that substring when classifying probe
    /// failures for the expected-rejection providers.
    #[error("{vendor} credentials missing")]
    CredentialsMissing { vendor: String },

    /// The external call failed in transit or returned a non-success status.
    #[error("{message}")]
    Transport { status: Option<u16>, message: String },

    /// Anything else caught at the outermost handler boundary.
    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl GatewayError {
    /// Creates an unknown-provider error.
    pub fn unknown_provider(name: impl Into<String>) -> Self {
        GatewayError::UnknownProvider(name.into())
    }

    /// Creates an unknown-action error.
    pub fn unknown_action(provider: Provider, action: impl Into<String>) -> Self {
        GatewayError::UnknownAction {
            provider,
            action: action.into(),
        }
    }

    /// Creates an invalid-payload error naming the missing fields.
    pub fn invalid_payload(missing: Vec<String>) -> Self {
        GatewayError::InvalidPayload { missing }
    }

    /// Creates a credentials-missing error for the named vendor.
    pub fn credentials_missing(vendor: impl Into<String>) -> Self {
        GatewayError::CredentialsMissing {
            vendor: vendor.into(),
        }
    }

    /// Creates a transport error without a status code (network, timeout).
    pub fn transport(message: impl Into<String>) -> Self {
        GatewayError::Transport {
            status: None,
            message: message.into(),
        }
    }

    /// Creates a transport error from a non-success HTTP response.
    pub fn transport_status(status: u16, vendor: &str, body: impl AsRef<str>) -> Self {
        GatewayError::Transport {
            status: Some(status),
            message: format!("{} API error ({}): {}", vendor, status, body.as_ref()),
        }
    }

    /// Creates an unexpected-failure error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        GatewayError::Unexpected(message.into())
    }

    /// True for caller errors rejected before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GatewayError::UnknownProvider(_)
                | GatewayError::UnknownAction { .. }
                | GatewayError::InvalidPayload { .. }
        )
    }

    /// HTTP status the error maps to: 400 for validation, 500 otherwise.
    pub fn status_code(&self) -> u16 {
        if self.is_validation() {
            400
        } else {
            500
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::transport(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            GatewayError::transport(format!("Connection failed: {}", err))
        } else {
            GatewayError::transport(err.to_string())
        }
    }
}
