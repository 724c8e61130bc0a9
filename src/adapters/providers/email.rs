//! Email provider adapter - Resend-style REST client.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::EmailConfig;
use crate::domain::GatewayError;
use crate::ports::{EmailClient, EmailReceipt, OutboundEmail};

const VENDOR: &str = "Resend";

/// REST adapter for the email provider.
pub struct RestEmailClient {
    api_key: Option<SecretString>,
    from_header: String,
    base_url: String,
    client: Client,
}

impl RestEmailClient {
    /// Creates a new email client from configuration.
    pub fn new(config: EmailConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let from_header = config.from_header();
        Self {
            api_key: config
                .api_key
                .filter(|k| !k.is_empty())
                .map(SecretString::new),
            from_header,
            base_url: config.base_url,
            client,
        }
    }

    fn api_key(&self) -> Result<&str, GatewayError> {
        self.api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .ok_or_else(|| GatewayError::credentials_missing(VENDOR))
    }
}

#[async_trait]
impl EmailClient for RestEmailClient {
    async fn send_email(&self, email: OutboundEmail) -> Result<EmailReceipt, GatewayError> {
        let api_key = self.api_key()?;
        let url = format!("{}/emails", self.base_url);

        let body = EmailBody {
            from: self.from_header.clone(),
            to: vec![email.to],
            subject: email.subject,
            text: email.text,
            html: email.html,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), error = %body, "Email API call failed");

            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(GatewayError::transport_status(
                status.as_u16(),
                VENDOR,
                message,
            ));
        }

        let accepted: ApiEmail = response
            .json()
            .await
            .map_err(|e| GatewayError::unexpected(format!("Invalid email response: {}", e)))?;

        Ok(EmailReceipt { id: accepted.id })
    }
}

// ----- Email API Types -----

#[derive(Debug, Serialize)]
struct EmailBody {
    from: String,
    to: Vec<String>,
    subject: String,
    text: String,
    html: String,
}

#[derive(Debug, Deserialize)]
struct ApiEmail {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}
