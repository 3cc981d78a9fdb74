//! Text-generation collaborator
//!
//! The analyzer only needs "prompt in, text out". The default implementation
//! talks to any OpenAI-compatible `/chat/completions` endpoint.

use crate::config::LlmConfig;
use crate::CheckerError;
use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};

/// Anything that can turn a prompt into free text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, CheckerError>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    presence_penalty: f32,
    stream: bool,
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
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat completion API
#[derive(Debug, Clone)]
pub struct ChatCompletionsClient {
    http_client: Client,
    base_url: String,
    api_key: String,
    config: LlmConfig,
}

impl ChatCompletionsClient {
    pub fn new(http_client: Client, config: &LlmConfig, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: config.api_base.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            config: config.clone(),
        }
    }

    /// Creates a client with the key read from the configured variable
    ///
    /// Returns None when the variable is unset or empty.
    pub fn from_env(http_client: Client, config: &LlmConfig) -> Option<Self> {
        match std::env::var(&config.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Some(Self::new(http_client, config, key)),
            _ => {
                tracing::warn!(
                    "{} not found in environment variables, AI analysis disabled",
                    config.api_key_env
                );
                None
            }
        }
    }
}

#[async_trait]
impl TextGenerator for ChatCompletionsClient {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, CheckerError> {
        let start = std::time::Instant::now();
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            top_p: self.config.top_p,
            presence_penalty: self.config.presence_penalty,
            stream: false,
        };

        let response = self
            .http_client
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|source| CheckerError::Http { url, source })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(CheckerError::TextGeneration(format!(
                "HTTP {}: {}",
                status.as_u16(),
                error_text
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| CheckerError::TextGeneration(e.to_string()))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CheckerError::TextGeneration("empty completion".to_string()))?;

        tracing::debug!(
            "Chat completion from {} in {} ms",
            self.config.model,
            start.elapsed().as_millis()
        );

        Ok(content)
    }
}
