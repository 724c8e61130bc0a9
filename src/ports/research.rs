//! Web research provider port.

use async_trait::async_trait;

use crate::domain::GatewayError;

/// Port for the web search / research provider.
#[async_trait]
pub trait ResearchClient: Send + Sync {
    /// Runs one research query.
    async fn search(&self, call: ResearchCall) -> Result<ResearchFindings, GatewayError>;
}

/// A shaped research call: the handler has already selected the model
/// tier and recency filter for the requested search type.
#[derive(Debug, Clone)]
pub struct ResearchCall {
    pub model: String,
    pub query: String,
    /// Recency filter accepted by the provider (e.g. "day", "month").
    pub recency: String,
    /// Ask the provider to include related follow-up questions.
    pub related_questions: bool,
}

/// Raw provider findings before gateway post-processing.
#[derive(Debug, Clone, Default)]
pub struct ResearchFindings {
    /// Raw text answer; insights and sources are extracted from this.
    pub content: String,
    /// Related questions supplied by the provider, possibly empty.
    pub related_questions: Vec<String>,
}
