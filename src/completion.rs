use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::chat::ChatMessage;
use crate::constants;

/// Failure raised by the completion call. There is deliberately no retry or
/// backoff here; callers decide how to degrade.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("completion API returned status {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("completion API returned no choices")]
    EmptyChoices,
}

// Structures matching the OpenAI-compatible /chat/completions endpoint
#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize, Debug)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    content: String,
}

/// Thin client for an OpenAI-compatible chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl CompletionClient {
    /// Client configured from the environment-backed constants (OpenRouter by
    /// default).
    pub fn from_env() -> Self {
        Self::new(
            constants::OPENROUTER_BASE_URL.clone(),
            constants::OPENROUTER_API_KEY.clone(),
            constants::GPT_MODEL.clone(),
        )
    }

    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            model,
        }
    }

    /// Send the message list and return the first choice's content.
    ///
    /// `max_tokens` and `temperature` fall back to the deployment defaults
    /// (500 / 0.7) when not given.
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        max_tokens: Option<u32>,
        temperature: Option<f32>,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let payload = CompletionRequest {
            model: &self.model,
            messages,
            max_tokens: max_tokens.unwrap_or(constants::MAX_TOKENS),
            temperature: temperature.unwrap_or(constants::TEMPERATURE),
        };

        debug!(model = %self.model, message_count = messages.len(), "Sending completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            error!(%status, %body, "Completion API request failed");
            return Err(ProviderError::Api { status, body });
        }

        let completion = response.json::<CompletionResponse>().await?;
        let reply = completion
            .choices
            .into_iter()
            .next()
            .ok_or(ProviderError::EmptyChoices)?
            .message
            .content;

        debug!(reply_len = reply.len(), "Received completion response");
        Ok(reply)
    }
}
