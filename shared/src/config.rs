//! Configuration management for Lambda functions.

use std::env;

const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-latest";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key. Absence is reported per-request as a configuration
    /// error rather than failing Lambda startup.
    pub gemini_api_key: Option<String>,
    /// Base URL of the Gemini API
    pub gemini_endpoint: String,
    /// Model used for all generation calls
    pub gemini_model: String,
    /// Timeout applied to each outbound generation call, in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            gemini_endpoint: env::var("GEMINI_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_GEMINI_ENDPOINT.to_string()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            request_timeout_secs: env::var("GEMINI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }
}
