//! Voice call provider adapter - Twilio-style REST client.
//!
//! The calls endpoint takes a form-encoded POST with basic auth; the
//! TwiML document arrives pre-built from the handler.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use crate::config::VoiceConfig;
use crate::domain::GatewayError;
use crate::ports::{CallRecord, PlaceCallRequest, VoiceClient};

const VENDOR: &str = "Twilio";

/// REST adapter for the voice call provider.
pub struct RestVoiceClient {
    credentials: Option<VoiceCredentials>,
    base_url: String,
    client: Client,
}

#[derive(Debug)]
struct VoiceCredentials {
    account_sid: String,
    auth_token: SecretString,
    from_number: String,
}

impl RestVoiceClient {
    /// Creates a new voice client from configuration.
    pub fn new(config: VoiceConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let credentials = match (config.account_sid, config.auth_token, config.from_number) {
            (Some(sid), Some(token), Some(from))
                if !sid.is_empty() && !token.is_empty() && !from.is_empty() =>
            {
                Some(VoiceCredentials {
                    account_sid: sid,
                    auth_token: SecretString::new(token),
                    from_number: from,
                })
            }
            _ => None,
        };

        Self {
            credentials,
            base_url: config.base_url,
            client,
        }
    }

    fn credentials(&self) -> Result<&VoiceCredentials, GatewayError> {
        self.credentials
            .as_ref()
            .ok_or_else(|| GatewayError::credentials_missing(VENDOR))
    }
}

#[async_trait]
impl VoiceClient for RestVoiceClient {
    async fn place_call(&self, request: PlaceCallRequest) -> Result<CallRecord, GatewayError> {
        let credentials = self.credentials()?;
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Calls.json",
            self.base_url, credentials.account_sid
        );

        let params = [
            ("To", request.to.as_str()),
            ("From", credentials.from_number.as_str()),
            ("Twiml", request.twiml.as_str()),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth(
                &credentials.account_sid,
                Some(credentials.auth_token.expose_secret()),
            )
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), error = %body, "Voice API call failed");

            // The calls endpoint reports validation problems as JSON with
            // a human-readable message; surface that text so probe
            // classification can see it.
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(GatewayError::transport_status(
                status.as_u16(),
                VENDOR,
                message,
            ));
        }

        let call: ApiCall = response
            .json()
            .await
            .map_err(|e| GatewayError::unexpected(format!("Invalid call response: {}", e)))?;

        Ok(CallRecord {
            sid: call.sid,
            status: call.status,
        })
    }
}

// ----- Voice API Types -----

#[derive(Debug, Deserialize)]
struct ApiCall {
    sid: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}
