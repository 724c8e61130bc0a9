//! Email provider port.

use async_trait::async_trait;

use crate::domain::GatewayError;

/// Port for the transactional email provider.
#[async_trait]
pub trait EmailClient: Send + Sync {
    /// Sends one email.
    async fn send_email(&self, email: OutboundEmail) -> Result<EmailReceipt, GatewayError>;
}

/// A shaped outbound email. `subject` arrives already tagged and `html`
/// already defaulted by the handler.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Provider acknowledgement of an accepted email.
#[derive(Debug, Clone)]
pub struct EmailReceipt {
    /// Provider-assigned message id, when supplied.
    pub id: Option<String>,
}
