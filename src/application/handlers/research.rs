//! Web research handler - model tier selection and response
//! post-processing (insights and source hostnames).

use serde_json::{json, Value};

use crate::domain::{correlation_id, GatewayError, Payload};
use crate::ports::{ResearchCall, ResearchClient};

/// Insight lines must be longer than this many characters.
const MIN_INSIGHT_LEN: usize = 20;

/// At most this many insights are kept.
const MAX_INSIGHTS: usize = 5;

/// At most this many unique source hostnames are kept.
const MAX_SOURCES: usize = 10;

/// Search type requested by the caller; selects model tier and recency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    General,
    News,
    Academic,
    Financial,
}

impl SearchType {
    /// Parses the wire value, defaulting to general for anything else.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("news") => SearchType::News,
            Some("academic") => SearchType::Academic,
            Some("financial") => SearchType::Financial,
            _ => SearchType::General,
        }
    }

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::General => "general",
            SearchType::News => "news",
            SearchType::Academic => "academic",
            SearchType::Financial => "financial",
        }
    }

    /// Fixed model identifier for this search type.
    pub fn model(&self) -> &'static str {
        match self {
            SearchType::General | SearchType::News => "sonar",
            SearchType::Academic => "sonar-reasoning",
            SearchType::Financial => "sonar-pro",
        }
    }

    /// Recency filter sent to the provider.
    pub fn recency(&self) -> &'static str {
        match self {
            SearchType::News => "day",
            _ => "month",
        }
    }
}

/// Runs one research query and post-processes the raw answer.
pub async fn research(
    client: &dyn ResearchClient,
    agent_id: &str,
    payload: &Payload,
) -> Result<Value, GatewayError> {
    let query = payload.str_field("query").unwrap_or_default().to_string();
    let search_type = SearchType::parse(payload.str_field("searchType"));

    let findings = client
        .search(ResearchCall {
            model: search_type.model().to_string(),
            query: query.clone(),
            recency: search_type.recency().to_string(),
            related_questions: true,
        })
        .await?;

    let insights = extract_insights(&findings.content);
    let sources = extract_sources(&findings.content);

    Ok(json!({
        "agentId": agent_id,
        "query": query,
        "searchType": search_type.as_str(),
        "model": search_type.model(),
        "summary": findings.content,
        "insights": insights,
        "sources": sources,
        "relatedQuestions": findings.related_questions,
        "researchId": correlation_id("research"),
    }))
}

/// Splits the answer into lines, discards short ones, keeps at most
/// five in original order.
fn extract_insights(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.len() > MIN_INSIGHT_LEN)
        .take(MAX_INSIGHTS)
        .map(str::to_string)
        .collect()
}

/// Pattern-matches URLs in the answer, reduces them to unique hostnames
/// in first-seen order, capped at ten.
fn extract_sources(content: &str) -> Vec<String> {
    let mut hosts: Vec<String> = Vec::new();

    for start in find_url_starts(content) {
        let rest = &content[start..];
        let end = rest
            .find(|c: char| c.is_whitespace() || matches!(c, ')' | ']' | '>' | '"' | '\''))
            .unwrap_or(rest.len());
        let raw = rest[..end].trim_end_matches(['.', ',', ';', ':']);

        if let Ok(url) = reqwest::Url::parse(raw) {
            if let Some(host) = url.host_str() {
                if !hosts.iter().any(|h| h == host) {
                    hosts.push(host.to_string());
                    if hosts.len() == MAX_SOURCES {
                        break;
                    }
                }
            }
        }
    }

    hosts
}

fn find_url_starts(content: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    for (index, _) in content.match_indices("http") {
        let rest = &content[index..];
        if rest.starts_with("http://") || rest.starts_with("https://") {
            starts.push(index);
        }
    }
    starts
}
