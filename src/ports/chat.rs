//! Chat completion provider port.

use async_trait::async_trait;

use crate::domain::GatewayError;

/// Port for the chat completion provider.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Issues one completion call.
    async fn complete(&self, call: ChatCall) -> Result<ChatReply, GatewayError>;
}

/// A shaped completion call: persona prompt composed, history trimmed,
/// sampling fixed by the handler.
#[derive(Debug, Clone)]
pub struct ChatCall {
    pub system_prompt: String,
    pub turns: Vec<ChatTurn>,
    pub temperature: f32,
    pub presence_penalty: f32,
}

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
}

impl ChatTurn {
    /// Creates a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    /// Creates an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }
}

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Assistant,
}

impl TurnRole {
    /// Wire name used by chat completion APIs.
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Assistant => "assistant",
        }
    }
}

/// Provider reply to a completion call.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub content: String,
    pub model: String,
}
