//! Normalized result envelope shared by every action path.

use serde::Serialize;
use serde_json::Value;

use super::error::GatewayError;
use super::timestamp::Timestamp;

/// Uniform action outcome: exactly one of `data`/`error` is populated.
///
/// Every path through a provider handler produces exactly one of these;
/// nothing throws past the router boundary.
#[derive(Debug, Clone, Serialize)]
pub struct ActionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: Timestamp,
}

impl ActionResult {
    /// Successful envelope carrying normalized data.
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Timestamp::now(),
        }
    }

    /// Failed envelope carrying an error message.
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            timestamp: Timestamp::now(),
        }
    }

    /// The error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl From<Result<Value, GatewayError>> for ActionResult {
    fn from(result: Result<Value, GatewayError>) -> Self {
        match result {
            Ok(data) => ActionResult::ok(data),
            Err(err) => ActionResult::fail(err.to_string()),
        }
    }
}

/// Correlation id for results where the provider supplies no id of its
/// own: `"<kind>_<epoch-ms>"`.
pub fn correlation_id(kind: &str) -> String {
    format!("{}_{}", kind, Timestamp::now().epoch_millis())
}
