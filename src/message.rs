// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Assistant,
}

impl Role {
    /// Unrecognized or missing roles fall back to `User`.
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        match raw {
            Some("assistant") => Role::Assistant,
            _ => Role::User,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self { role, text: text.into() }
    }

    /// Build a message from an arbitrary element of an inbound `messages`
    /// array. Text is read from `text`, then `content`; anything else is empty.
    pub fn from_value(value: &Value) -> Self {
        let role = Role::parse_lenient(value.get("role").and_then(Value::as_str));
        let text = value
            .get("text")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .or_else(|| value.get("content").and_then(Value::as_str))
            .unwrap_or_default();

        Self::new(role, text)
    }
}

/// Single-turn request body for `POST /chat`.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

/// Multi-turn request body for `POST /api/chat`. `messages` stays untyped so
/// a non-array value is reported as a validation failure.
#[derive(Debug, Default, Deserialize)]
pub struct ConversationRequest {
    pub messages: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}
