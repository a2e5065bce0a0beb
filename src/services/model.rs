// src/services/model.rs
use async_trait::async_trait;
use thiserror::Error;

use crate::message::ChatMessage;

/// What gets sent upstream for one chat turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prompt {
    Text(String),
    /// Ordered oldest first.
    Conversation(Vec<ChatMessage>),
}

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("prompt blocked by upstream: {0}")]
    Blocked(String),
}

/// A single generative-language backend. Returns the raw, un-normalized text.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn generate(&self, prompt: Prompt) -> Result<String, UpstreamError>;
}
