//! Chat handler - persona prompt composition and history trimming.

use serde_json::{json, Value};

use crate::domain::{correlation_id, GatewayError, Payload};
use crate::ports::{ChatCall, ChatClient, ChatTurn};

/// Fixed persona template prefixed to every system prompt.
const PERSONA_TEMPLATE: &str = "You are a helpful AI agent working inside an agent dashboard. \
You act on behalf of your owner, answer concisely, and never invent capabilities you do not have.";

/// Only this many trailing history turns are forwarded.
const MAX_HISTORY_TURNS: usize = 8;

/// Fixed sampling configuration.
const TEMPERATURE: f32 = 0.7;
const PRESENCE_PENALTY: f32 = 0.6;

/// Issues one completion call with the composed persona prompt.
pub async fn chat(
    client: &dyn ChatClient,
    agent_id: &str,
    payload: &Payload,
) -> Result<Value, GatewayError> {
    let message = payload.str_field("message").unwrap_or_default();

    let system_prompt = build_system_prompt(
        payload.str_or("agentName", agent_id),
        payload.str_field("role"),
        payload.str_field("personality"),
    );

    let mut turns = history_turns(payload);
    turns.push(ChatTurn::user(message));

    let reply = client
        .complete(ChatCall {
            system_prompt,
            turns,
            temperature: TEMPERATURE,
            presence_penalty: PRESENCE_PENALTY,
        })
        .await?;

    Ok(json!({
        "agentId": agent_id,
        "reply": reply.content,
        "model": reply.model,
        "messageId": correlation_id("chat"),
    }))
}

/// Concatenates the fixed persona template with the caller-supplied
/// personality fields.
fn build_system_prompt(name: &str, role: Option<&str>, personality: Option<&str>) -> String {
    let mut prompt = format!("{} Your name is {}.", PERSONA_TEMPLATE, name);
    if let Some(role) = role {
        prompt.push_str(&format!(" Your role: {}.", role));
    }
    if let Some(personality) = personality {
        prompt.push_str(&format!(" Your personality: {}.", personality));
    }
    prompt
}

/// Up to the last eight turns of conversation history, oldest first.
fn history_turns(payload: &Payload) -> Vec<ChatTurn> {
    let Some(history) = payload.array_field("conversationHistory") else {
        return Vec::new();
    };

    let skip = history.len().saturating_sub(MAX_HISTORY_TURNS);
    history
        .iter()
        .skip(skip)
        .filter_map(|entry| {
            let content = entry.get("content")?.as_str()?;
            let turn = match entry.get("role").and_then(Value::as_str) {
                Some("assistant") => ChatTurn::assistant(content),
                _ => ChatTurn::user(content),
            };
            Some(turn)
        })
        .collect()
}
