//! Gateway client — the single point of entry for hosted-model calls.
//!
//! Every analysis request makes exactly one chat-completion call through
//! this module: no retries, no streaming, no conversation history. The
//! handler layer reaches the gateway only through the [`ChatCompletion`]
//! trait so tests can script replies and count outbound calls.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Hosted chat-completion endpoint serving the portal's AI features.
const GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";

/// The model used for all analysis calls.
/// Intentionally hardcoded to match the deployed gateway configuration.
pub const MODEL: &str = "google/gemini-2.5-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("AI gateway API key is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI gateway rate limit hit")]
    RateLimited,

    #[error("AI gateway usage quota exhausted")]
    QuotaExceeded,

    #[error("AI gateway error (status {status}): {message}")]
    Gateway { status: u16, message: String },

    #[error("AI gateway returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

/// Backend seam between handlers and the hosted gateway.
/// Carried in `AppState` as `Arc<dyn ChatCompletion>`.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Sends one system/user prompt pair and returns the assistant's raw text.
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError>;
}

/// HTTP implementation of [`ChatCompletion`] against the hosted gateway.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
}

impl LlmClient {
    /// The credential is injected at construction. A missing key fails each
    /// call before any request is issued.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl ChatCompletion for LlmClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .client
            .post(GATEWAY_URL)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if status.as_u16() == 429 {
            warn!("AI gateway rate limited the request");
            return Err(LlmError::RateLimited);
        }

        if status.as_u16() == 402 {
            warn!("AI gateway reported usage quota exhausted");
            return Err(LlmError::QuotaExceeded);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("AI gateway error: {} {}", status, body);
            return Err(LlmError::Gateway {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: ChatResponse = response.json().await?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(LlmError::EmptyContent)?;

        debug!("Gateway reply received ({} bytes)", content.len());

        Ok(content)
    }
}
