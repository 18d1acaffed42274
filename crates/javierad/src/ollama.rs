//! Ollama client - generation and liveness checks against the local service.

use crate::config::LlmConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Anything that can go wrong on the generation path.
///
/// The caller collapses every variant into one fallback message; the
/// variants exist so logs can say what actually happened.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Ollama request failed: {0}")]
    Status(reqwest::StatusCode),
}

/// Ollama generate request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerateOptions>,
}

/// Sampling options passed through to Ollama
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOptions {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
}

/// Ollama generate response (non-streaming)
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: String,
}

/// Client for the local Ollama service, fixed to one model and one set of
/// sampling parameters at construction time.
pub struct OllamaClient {
    http_client: reqwest::Client,
    base_url: String,
    model: String,
    options: GenerateOptions,
}

impl OllamaClient {
    pub fn new(config: &LlmConfig) -> Result<Self, GenerateError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.ollama_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            options: GenerateOptions {
                temperature: config.temperature,
                top_k: config.top_k,
                top_p: config.top_p,
            },
        })
    }

    /// The configured model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Check if the Ollama service is reachable
    pub async fn is_running(&self) -> bool {
        self.http_client
            .get(format!("{}/api/tags", self.base_url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    /// Send a single non-streaming generation request.
    ///
    /// Returns the raw response text; whitespace handling is the caller's
    /// concern. No retries.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let body = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
            options: Some(self.options.clone()),
        };

        debug!("Sending {} chars to {}", prompt.len(), self.model);

        let response = self
            .http_client
            .post(format!("{}/api/generate", self.base_url))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerateError::Status(response.status()));
        }

        let parsed: GenerateResponse = response.json().await?;
        Ok(parsed.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LlmConfig;

    #[test]
    fn test_request_serializes_sampling_options() {
        let request = GenerateRequest {
            model: "llama3.2:1b".to_string(),
            prompt: "hello".to_string(),
            stream: false,
            options: Some(GenerateOptions {
                temperature: 0.2,
                top_k: 20,
                top_p: 0.5,
            }),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3.2:1b");
        assert_eq!(json["stream"], false);
        assert_eq!(json["options"]["temperature"], 0.2);
        assert_eq!(json["options"]["top_k"], 20);
        assert_eq!(json["options"]["top_p"], 0.5);
    }

    #[test]
    fn test_request_omits_absent_options() {
        let request = GenerateRequest {
            model: "m".to_string(),
            prompt: "p".to_string(),
            stream: false,
            options: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("options").is_none());
    }

    #[test]
    fn test_response_parses() {
        let parsed: GenerateResponse =
            serde_json::from_str(r#"{"model":"llama3.2:1b","response":"  Hi there!  ","done":true}"#)
                .unwrap();
        assert_eq!(parsed.response, "  Hi there!  ");
    }

    #[test]
    fn test_response_tolerates_missing_field() {
        let parsed: GenerateResponse = serde_json::from_str(r#"{"done":true}"#).unwrap();
        assert_eq!(parsed.response, "");
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let config = LlmConfig {
            ollama_url: "http://127.0.0.1:11434/".to_string(),
            ..LlmConfig::default()
        };
        let client = OllamaClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:11434");
    }
}
