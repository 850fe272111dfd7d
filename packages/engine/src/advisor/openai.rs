//! OpenAI-backed advisor using the chat completions API.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{suggestion_prompt, Advisor};
use crate::error::{AdvisoryError, AdvisoryResult};
use crate::types::Criteria;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Advisor backed by the OpenAI chat completions API.
///
/// The API key comes in through the constructor (sourced from
/// configuration by the caller); it is never read from a global or
/// embedded as a constant.
pub struct OpenAiAdvisor {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

impl OpenAiAdvisor {
    /// Create an advisor with the default model.
    pub fn new(api_key: impl Into<String>) -> AdvisoryResult<Self> {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// Create an advisor with a specific model.
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> AdvisoryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AdvisoryError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
        })
    }

    /// Override the API base URL (for tests and proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Advisor for OpenAiAdvisor {
    async fn suggest(&self, criteria: &Criteria) -> AdvisoryResult<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: suggestion_prompt(criteria),
            }],
            temperature: 0.7,
            max_tokens: 150,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenAI advisory request failed");
                AdvisoryError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %body, "OpenAI advisory API error");
            return Err(AdvisoryError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| AdvisoryError::Network(e.to_string()))?;

        let text = chat
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(AdvisoryError::EmptyCompletion)?;

        Ok(text)
    }
}
