//! Ollama HTTP API generator
//!
//! Non-streaming client for POST /api/generate, for deployments where the
//! model is reached over the network instead of through the local CLI.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::{PipelineError, Result};
use crate::llm::Generator;
use async_trait::async_trait;

/// Default Ollama API endpoint
pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";

/// Request timeout; generation on small local models can be slow
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Generator backed by the Ollama HTTP API
#[derive(Debug, Clone)]
pub struct OllamaHttp {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaHttp {
    /// Create a client for the given endpoint and model
    pub fn new(base_url: &str, model: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(PipelineError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    /// Check if the Ollama server is reachable
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/api/version", self.base_url);

        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// Get current model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Generator for OllamaHttp {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);

        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| PipelineError::OllamaApi(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PipelineError::OllamaApi(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let reply: GenerateResponse = response
            .json()
            .await
            .map_err(|e| PipelineError::OllamaApi(format!("Failed to parse response: {}", e)))?;

        Ok(reply.response.trim().to_string())
    }
}

/// Ollama generate request
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Ollama generate response
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}
