//! HTTP client for the external scheduling service.
//!
//! The service is treated as text-in/text-out: the prompt goes up, the first
//! choice's message content comes back as-is. Decoding that text into task
//! records happens in schedcal-core, never here.

use std::time::Duration;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use schedcal_core::schedule::SYSTEM_PROMPT;

const API_URL: &str = "https://api.openai.com/v1/chat/completions";
const REQUEST_TIMEOUT_SECS: u64 = 90;
const RETRY_DELAY_MS: u64 = 1_000;

/// Client for the scheduling service.
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

// Request/response types matching the chat-completions API

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// A failed request, split by whether a retry could plausibly help.
enum CallError {
    Transient(anyhow::Error),
    Fatal(anyhow::Error),
}

impl CallError {
    fn into_inner(self) -> anyhow::Error {
        match self {
            CallError::Transient(e) | CallError::Fatal(e) => e,
        }
    }
}

impl Client {
    pub fn new(api_key: String, model: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            api_key,
            model,
        })
    }

    /// Send the scheduling prompt and return the raw reply text.
    ///
    /// One bounded retry on transient failures (connection errors, timeouts,
    /// HTTP 429/5xx); anything else surfaces immediately.
    pub async fn schedule(&self, prompt: &str) -> Result<String> {
        match self.request(prompt).await {
            Ok(reply) => Ok(reply),
            Err(CallError::Fatal(e)) => Err(e),
            Err(CallError::Transient(_)) => {
                tokio::time::sleep(Duration::from_millis(RETRY_DELAY_MS)).await;
                self.request(prompt).await.map_err(CallError::into_inner)
            }
        }
    }

    async fn request(&self, prompt: &str) -> Result<String, CallError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .http
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                CallError::Transient(anyhow!("Could not reach the scheduling service: {e}"))
            })?;

        let status = response.status();
        if status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CallError::Transient(anyhow!(
                "Scheduling service returned HTTP {status}"
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CallError::Fatal(anyhow!(
                "Scheduling service returned HTTP {status}: {body}"
            )));
        }

        let reply: ChatResponse = response
            .json()
            .await
            .map_err(|e| CallError::Fatal(anyhow!("Malformed completion envelope: {e}")))?;

        reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CallError::Fatal(anyhow!("Scheduling service returned no choices")))
    }
}
