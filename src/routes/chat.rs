// src/routes/chat.rs
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;
use tracing::{error, warn};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatMessage, ChatRequest, ChatResponse, ConversationRequest},
    services::{model::Prompt, normalizer::normalize},
    state::SharedState,
};

const MESSAGE_REQUIRED: &str = "Message is required";
const MESSAGES_REQUIRED: &str = "messages array required";

/// Single-turn chat: `{ "message": "..." }`.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload.map_err(rejected)?;

    let message = match payload.message {
        Some(m) if !m.trim().is_empty() => m,
        _ => return Err(invalid(MESSAGE_REQUIRED)),
    };

    let reply = relay(&state, Prompt::Text(message)).await?;
    Ok(Json(ChatResponse { reply }))
}

/// Multi-turn chat: `{ "messages": [{ "role": ..., "text": ... }, ...] }`.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn conversation_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ConversationRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload.map_err(rejected)?;

    let history: Vec<ChatMessage> = match payload.messages {
        Some(Value::Array(items)) if !items.is_empty() => {
            items.iter().map(ChatMessage::from_value).collect()
        }
        _ => return Err(invalid(MESSAGES_REQUIRED)),
    };

    let reply = relay(&state, Prompt::Conversation(history)).await?;
    Ok(Json(ChatResponse { reply }))
}

/// One upstream call, then normalization. Failures are logged and surfaced as-is.
async fn relay(state: &SharedState, prompt: Prompt) -> Result<String, AppError> {
    match state.model.generate(prompt).await {
        Ok(raw) => Ok(normalize(&raw)),
        Err(e) => {
            error!(error = %e, "upstream model call failed");
            Err(e.into())
        }
    }
}

fn invalid(message: &str) -> AppError {
    warn!(reason = message, "rejecting chat request");
    AppError::Validation(message.to_string())
}

fn rejected(rejection: JsonRejection) -> AppError {
    warn!(reason = %rejection.body_text(), "rejecting malformed chat body");
    rejection.into()
}
