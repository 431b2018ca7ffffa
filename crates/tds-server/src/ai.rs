//! Hosted language-model client
//!
//! A single blocking external-call boundary with its own timeout and its own
//! failure tier, kept apart from the import pipeline's error taxonomy. The
//! client is constructed once from [`AiConfig`] and passed by reference
//! through application state; nothing in this crate reaches for a
//! process-wide AI handle.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::AiConfig;

/// Errors from the AI upstream call
#[derive(Debug, Error)]
pub enum AiError {
    #[error("AI upstream timed out")]
    Timeout,

    #[error("AI upstream request failed: {0}")]
    Http(reqwest::Error),

    #[error("AI upstream returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("AI upstream response was malformed")]
    MalformedResponse,
}

/// Client for the hosted chat-completion API
#[derive(Clone)]
pub struct AiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatRequestMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatRequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl AiClient {
    /// Build the client; the per-request timeout comes from configuration
    pub fn new(config: &AiConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Send one prompt and return the model's reply text
    #[tracing::instrument(skip(self, prompt), fields(model = %self.model))]
    pub async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatRequestMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "AI upstream rejected request");
            return Err(AiError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|_| AiError::MalformedResponse)?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(AiError::MalformedResponse)
    }
}

fn classify_transport_error(err: reqwest::Error) -> AiError {
    if err.is_timeout() {
        AiError::Timeout
    } else {
        AiError::Http(err)
    }
}
