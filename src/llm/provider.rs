//! LLM provider trait and the OpenAI-compatible implementation.

use async_trait::async_trait;
use reqwest::Client;

use super::error::LLMError;
use super::types::{CompletionRequest, CompletionResponse};

/// Capability interface for chat completion backends.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Make a single chat completion request.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LLMError>;
}

/// OpenAI-compatible provider (works for OpenAI, OpenRouter, Ollama, vLLM).
pub struct OpenAICompatProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenAICompatProvider {
    /// Endpoint used when no base-URL override is configured.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";

    pub fn new(base_url: Option<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string()),
            api_key,
        }
    }
}

#[async_trait]
impl LLMProvider for OpenAICompatProvider {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, LLMError> {
        let url = format!("{}/chat/completions", self.base_url);

        let mut req = self
            .client
            .post(&url)
            .header("Content-Type", "application/json");

        if let Some(ref key) = self.api_key {
            req = req.header("Authorization", format!("Bearer {}", key));
        }

        let response = req.json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(LLMError::Api { status, message });
        }

        Ok(response.json().await?)
    }
}
