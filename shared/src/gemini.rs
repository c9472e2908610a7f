//! Client for the Gemini text-generation API.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Config, Error, Result};

/// Narrow interface over the text-generation service.
///
/// The orchestrator only ever needs "one prompt in, one text out", so this is
/// the whole seam; tests substitute scripted implementations.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a single prompt.
    ///
    /// `Ok` with an empty string means the service answered but produced no
    /// usable text. Errors mean the service was unreachable, timed out, or
    /// returned a non-success reply.
    async fn generate_text(&self, prompt: &str) -> Result<String>;
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

impl GenerateContentRequest {
    fn new(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

impl GenerateContentResponse {
    /// First candidate's first part, or empty when the shape is missing.
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .unwrap_or_default()
    }
}

/// Client for the Gemini `generateContent` endpoint.
///
/// Calls are not retried, cached, or rate limited; each invocation is a
/// single bounded-timeout POST.
pub struct GeminiClient {
    http_client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a client from configuration.
    ///
    /// Fails with a configuration error when no API key is present.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config
            .gemini_api_key
            .clone()
            .ok_or_else(|| Error::Config("GEMINI_API_KEY not set".to_string()))?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint: config.gemini_endpoint.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
            api_key,
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let response = self
            .http_client
            .post(self.url())
            .json(&GenerateContentRequest::new(prompt))
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("Gemini request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!(
                "Gemini API returned {}: {}",
                status, body
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to decode Gemini response: {}", e)))?;

        Ok(body.into_text())
    }
}
