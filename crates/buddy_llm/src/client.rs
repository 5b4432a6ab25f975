//! Prompt gateway: trait + Ollama implementation (self-hosted).

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::config::OllamaConfig;
use crate::error::{LlmError, Result};
use crate::prompt::augment;
use crate::types::GenerateRequest;

/// Payload field holding the generated text.
const RESPONSE_FIELD: &str = "response";

/// The two proxy operations the gateway exposes.
#[async_trait]
pub trait PromptGateway: Send + Sync {
    /// Augment `prompt`, submit one generate call, and return the endpoint's
    /// entire payload unmodified.
    async fn full_result(&self, prompt: &str) -> Result<Value>;

    /// Augment `prompt`, submit one generate call, and return only the
    /// generated text. Fails with [`LlmError::MissingResponseField`] when the
    /// payload has no string `response` field.
    async fn response_only(&self, prompt: &str) -> Result<String>;
}

/// Ollama HTTP client. Self-hosted, no auth headers, no retries; timeouts are
/// whatever the transport default provides.
pub struct OllamaClient {
    config: OllamaConfig,
    client: reqwest::Client,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client from `OLLAMA_API_URL` / `OLLAMA_MODEL`.
    pub fn from_env() -> Self {
        Self::new(OllamaConfig::from_env())
    }

    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    /// Single synchronous generate call, streaming disabled. One attempt; a
    /// failed call fails the whole request.
    async fn generate(&self, prompt: String) -> Result<Value> {
        let body = GenerateRequest {
            model: self.config.model.clone(),
            prompt,
            stream: false,
        };

        debug!(model = %body.model, url = %self.config.api_url, "submitting generate request");

        let res = self
            .client
            .post(&self.config.api_url)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            return Err(LlmError::Endpoint { status, body: text });
        }

        let payload: Value = serde_json::from_str(&text)?;
        Ok(payload)
    }
}

#[async_trait]
impl PromptGateway for OllamaClient {
    async fn full_result(&self, prompt: &str) -> Result<Value> {
        self.generate(augment(prompt)).await
    }

    async fn response_only(&self, prompt: &str) -> Result<String> {
        let payload = self.generate(augment(prompt)).await?;
        let response = payload
            .get(RESPONSE_FIELD)
            .and_then(Value::as_str)
            .ok_or(LlmError::MissingResponseField)?;
        Ok(response.to_string())
    }
}
