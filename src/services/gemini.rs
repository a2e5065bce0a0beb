// src/services/gemini.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::model::{ChatModel, Prompt, UpstreamError};
use crate::config::Config;
use crate::message::{ChatMessage, Role};

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl Content {
    fn from_message(msg: &ChatMessage) -> Self {
        let role = match msg.role {
            Role::User => "user",
            Role::Assistant => "model",
        };
        Self { role, parts: vec![Part { text: msg.text.clone() }] }
    }
}

impl From<Prompt> for GenerateRequest {
    fn from(prompt: Prompt) -> Self {
        let contents = match prompt {
            Prompt::Text(text) => vec![Content { role: "user", parts: vec![Part { text }] }],
            Prompt::Conversation(history) => history.iter().map(Content::from_message).collect(),
        };
        Self { contents }
    }
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.base_url, &config.model, &config.api_key)
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl ChatModel for GeminiClient {
    async fn generate(&self, prompt: Prompt) -> Result<String, UpstreamError> {
        let body = GenerateRequest::from(prompt);
        debug!(model = %self.model, turns = body.contents.len(), "calling generateContent");

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(UpstreamError::Status { status: status.as_u16(), message });
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)
            .map_err(|e| UpstreamError::MalformedResponse(e.to_string()))?;

        let Some(candidate) = parsed.candidates.into_iter().next() else {
            return Err(match parsed.prompt_feedback.and_then(|f| f.block_reason) {
                Some(reason) => UpstreamError::Blocked(reason),
                None => UpstreamError::MalformedResponse("response has no candidates".to_string()),
            });
        };

        let reply = candidate
            .content
            .map(|c| c.parts.into_iter().map(|p| p.text).collect::<String>())
            .unwrap_or_default();

        debug!(chars = reply.len(), "generateContent succeeded");
        Ok(reply)
    }
}
