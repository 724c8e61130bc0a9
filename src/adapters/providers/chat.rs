//! Chat completion provider adapter - OpenAI-style REST client.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ChatConfig;
use crate::domain::GatewayError;
use crate::ports::{ChatCall, ChatClient, ChatReply};

const VENDOR: &str = "OpenAI";

/// REST adapter for the chat completion provider.
pub struct RestChatClient {
    api_key: Option<SecretString>,
    base_url: String,
    model: String,
    client: Client,
}

impl RestChatClient {
    /// Creates a new chat client from configuration.
    pub fn new(config: ChatConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key: config
                .api_key
                .filter(|k| !k.is_empty())
                .map(SecretString::new),
            base_url: config.base_url,
            model: config.model,
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
impl ChatClient for RestChatClient {
    async fn complete(&self, call: ChatCall) -> Result<ChatReply, GatewayError> {
        let api_key = self.api_key()?;
        let url = format!("{}/v1/chat/completions", self.base_url);

        let mut messages = Vec::with_capacity(call.turns.len() + 1);
        messages.push(CompletionMessage {
            role: "system",
            content: call.system_prompt,
        });
        for turn in call.turns {
            messages.push(CompletionMessage {
                role: turn.role.as_str(),
                content: turn.content,
            });
        }

        let body = CompletionBody {
            model: self.model.clone(),
            messages,
            temperature: call.temperature,
            presence_penalty: call.presence_penalty,
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
            tracing::warn!(status = status.as_u16(), error = %body, "Chat API call failed");
            return Err(GatewayError::transport_status(status.as_u16(), VENDOR, body));
        }

        let completion: Completion = response
            .json()
            .await
            .map_err(|e| GatewayError::unexpected(format!("Invalid chat response: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        Ok(ChatReply {
            content,
            model: completion.model,
        })
    }
}

// ----- Chat API Types -----

#[derive(Debug, Serialize)]
struct CompletionBody {
    model: String,
    messages: Vec<CompletionMessage>,
    temperature: f32,
    presence_penalty: f32,
}

#[derive(Debug, Serialize)]
struct CompletionMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct Completion {
    model: String,
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionChoiceMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_client_fails_with_credentials_error() {
        let client = RestChatClient::new(ChatConfig::default());
        let err = client.api_key().unwrap_err();
        assert_eq!(err.to_string(), "OpenAI credentials missing");
    }

    #[test]
    fn completion_parses_first_choice() {
        let completion: Completion = serde_json::from_value(serde_json::json!({
            "model": "gpt-4o-mini",
            "choices": [
                {"message": {"role": "assistant", "content": "Hi there"}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ]
        }))
        .unwrap();

        assert_eq!(completion.model, "gpt-4o-mini");
        assert_eq!(completion.choices[0].message.content, "Hi there");
    }
}
