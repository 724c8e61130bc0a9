//! Web research provider adapter - Perplexity-style REST client.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ResearchConfig;
use crate::domain::GatewayError;
use crate::ports::{ResearchCall, ResearchClient, ResearchFindings};

const VENDOR: &str = "Perplexity";

/// System instruction sent with every research query.
const RESEARCH_SYSTEM_PROMPT: &str =
    "Be precise and factual. Cite sources with full URLs where possible.";

/// REST adapter for the web research provider.
pub struct RestResearchClient {
    api_key: Option<SecretString>,
    base_url: String,
    client: Client,
}

impl RestResearchClient {
    /// Creates a new research client from configuration.
    pub fn new(config: ResearchConfig) -> Self {
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
impl ResearchClient for RestResearchClient {
    async fn search(&self, call: ResearchCall) -> Result<ResearchFindings, GatewayError> {
        let api_key = self.api_key()?;
        let url = format!("{}/chat/completions", self.base_url);

        let body = SearchBody {
            model: call.model,
            messages: vec![
                SearchMessage {
                    role: "system",
                    content: RESEARCH_SYSTEM_PROMPT.to_string(),
                },
                SearchMessage {
                    role: "user",
                    content: call.query,
                },
            ],
            return_related_questions: call.related_questions,
            search_recency_filter: call.recency,
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
            tracing::warn!(status = status.as_u16(), error = %body, "Research API call failed");
            return Err(GatewayError::transport_status(status.as_u16(), VENDOR, body));
        }

        let completion: SearchCompletion = response
            .json()
            .await
            .map_err(|e| GatewayError::unexpected(format!("Invalid research response: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        Ok(ResearchFindings {
            content,
            related_questions: completion.related_questions,
        })
    }
}

// ----- Research API Types -----

#[derive(Debug, Serialize)]
struct SearchBody {
    model: String,
    messages: Vec<SearchMessage>,
    return_related_questions: bool,
    search_recency_filter: String,
}

#[derive(Debug, Serialize)]
struct SearchMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct SearchCompletion {
    choices: Vec<SearchChoice>,
    #[serde(default)]
    related_questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SearchChoice {
    message: SearchChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct SearchChoiceMessage {
    content: String,
}
