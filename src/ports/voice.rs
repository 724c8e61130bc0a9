//! Voice call provider port.

use async_trait::async_trait;

use crate::domain::GatewayError;

/// Port for the outbound voice call provider.
///
/// The handler owns script building; the port receives the finished
/// TwiML document and the destination number.
#[async_trait]
pub trait VoiceClient: Send + Sync {
    /// Places an outbound call.
    async fn place_call(&self, request: PlaceCallRequest) -> Result<CallRecord, GatewayError>;
}

/// A shaped outbound call.
#[derive(Debug, Clone)]
pub struct PlaceCallRequest {
    /// Destination number in E.164 form.
    pub to: String,
    /// TwiML document spoken to the callee.
    pub twiml: String,
}

/// Provider acknowledgement of a placed call.
#[derive(Debug, Clone)]
pub struct CallRecord {
    /// Provider-assigned call SID, when supplied.
    pub sid: Option<String>,
    /// Initial call status as reported by the provider.
    pub status: Option<String>,
}
