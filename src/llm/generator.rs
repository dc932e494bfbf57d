//! Core `TextGenerator` trait and `ApiGenerator` implementation.
//!
//! `ApiGenerator` speaks two wire formats:
//! * Gemini `generateContent` (`LlmProvider::Gemini`)
//! * OpenAI `/v1/chat/completions` (`OpenAiCompatible`, `Ollama`)
//!
//! All connection details come from [`LlmConfig`]; nothing is hardcoded.

use async_trait::async_trait;
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::{LlmConfig, LlmProvider};

// ---------------------------------------------------------------------------
// LlmError
// ---------------------------------------------------------------------------

/// Errors that can occur while asking the generative model.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("LLM request timed out")]
    Timeout,

    /// The endpoint answered with a non-success status.
    #[error("LLM endpoint returned HTTP {0}")]
    Status(u16),

    /// The HTTP response could not be parsed as expected JSON.
    #[error("failed to parse LLM response: {0}")]
    Parse(String),

    /// The model returned no usable text.
    #[error("LLM returned an empty response")]
    EmptyResponse,

    /// Provider disabled or credentials missing.
    #[error("LLM provider is not configured")]
    NotConfigured,
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// TextGenerator trait
// ---------------------------------------------------------------------------

/// Async trait for free-text generation.
///
/// Implementors must be `Send + Sync` so they can be shared as
/// `Arc<dyn TextGenerator>`.  The call is read-only from the bot's point of
/// view, so callers may retry it.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, system: &str, user: &str) -> Result<String, LlmError>;
}

// ---------------------------------------------------------------------------
// ApiGenerator
// ---------------------------------------------------------------------------

/// Calls the configured remote model over HTTP.
pub struct ApiGenerator {
    client: reqwest::Client,
    config: LlmConfig,
}

impl ApiGenerator {
    /// The HTTP client carries the per-request timeout from
    /// `config.timeout_secs`.  A default client is used if the builder
    /// fails.
    pub fn from_config(config: &LlmConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }

    fn endpoint(&self) -> String {
        let base = self.config.base_url().trim_end_matches('/');
        match self.config.provider {
            LlmProvider::Gemini => {
                format!("{base}/v1beta/models/{}:generateContent", self.config.model)
            }
            _ => format!("{base}/v1/chat/completions"),
        }
    }

    fn api_key(&self) -> Option<&str> {
        self.config.api_key.as_deref().filter(|k| !k.is_empty())
    }
}

#[async_trait]
impl TextGenerator for ApiGenerator {
    async fn generate(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let provider = self.config.provider;
        if provider == LlmProvider::Disabled {
            return Err(LlmError::NotConfigured);
        }

        let body = request_body(&self.config, system, user);
        let mut req = self.client.post(self.endpoint()).json(&body);

        match (provider, self.api_key()) {
            (LlmProvider::Gemini, Some(key)) => req = req.header("x-goog-api-key", key),
            (LlmProvider::Gemini, None) => return Err(LlmError::NotConfigured),
            (_, Some(key)) => req = req.bearer_auth(key),
            (_, None) => {}
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Status(status.as_u16()));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        extract_text(provider, &json)
    }
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

fn request_body(config: &LlmConfig, system: &str, user: &str) -> Value {
    match config.provider {
        LlmProvider::Gemini => json!({
            "systemInstruction": { "parts": [ { "text": system } ] },
            "contents": [
                { "role": "user", "parts": [ { "text": user } ] }
            ],
            "generationConfig": {
                "temperature":     config.temperature,
                "maxOutputTokens": config.max_tokens
            }
        }),
        _ => json!({
            "model":       config.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user",   "content": user   }
            ],
            "stream":      false,
            "temperature": config.temperature,
            "max_tokens":  config.max_tokens
        }),
    }
}

fn extract_text(provider: LlmProvider, json: &Value) -> Result<String, LlmError> {
    let text = match provider {
        LlmProvider::Gemini => json["candidates"][0]["content"]["parts"][0]["text"].as_str(),
        _ => json["choices"][0]["message"]["content"].as_str(),
    }
    .ok_or(LlmError::EmptyResponse)?
    .trim();

    if text.is_empty() {
        return Err(LlmError::EmptyResponse);
    }
    Ok(text.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
