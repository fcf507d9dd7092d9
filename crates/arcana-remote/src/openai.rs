//! OpenAI-compatible chat completion client.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::RemoteConfig;
use crate::error::{RemoteError, RemoteResult};
use crate::generator::TextGenerator;
use crate::prompt::SYSTEM_PROMPT;

/// Sampling temperature for readings.
pub const TEMPERATURE: f32 = 0.7;

/// Completion token limit for readings.
pub const MAX_TOKENS: u32 = 2500;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Generator backed by the chat completions endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiGenerator {
    config: RemoteConfig,
    client: Client,
}

impl OpenAiGenerator {
    /// Create a generator from a configuration.
    pub fn new(config: RemoteConfig) -> RemoteResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RemoteError::Configuration(format!("HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    /// The configuration in use.
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    fn request<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
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
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

fn extract_content(response: ChatResponse) -> RemoteResult<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| RemoteError::Format("no message content in response".to_string()))
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> RemoteResult<String> {
        let key = self.config.api_key().ok_or_else(|| {
            RemoteError::Configuration(format!("no API key for {}", self.config.provider))
        })?;

        tracing::debug!(
            model = %self.config.model,
            url = %self.completions_url(),
            "sending completion request"
        );
        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(key.expose_secret())
            .json(&self.request(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RemoteError::Transport(format!(
                        "timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else {
                    RemoteError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => RemoteError::Transport("authentication failed".to_string()),
                429 => RemoteError::Transport("rate limited".to_string()),
                _ => RemoteError::Transport(format!("status {status}: {body}")),
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| RemoteError::Format(e.to_string()))?;
        extract_content(parsed)
    }
}
