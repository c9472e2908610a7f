//! Analyze Lambda - Handles the /analyze-content endpoint.
//!
//! Receives raw study content plus a content-type tag from the upload UI,
//! drives the Gemini analysis pipeline (summary, then flashcards and quiz),
//! and returns the combined result as one JSON document.

use lambda_http::http::Method;
use lambda_http::{run, service_fn, Body, Error, Request, RequestPayloadExt, Response};
use shared::http::{error_response, json_response, preflight_response};
use shared::{AnalyzeRequest, Config, ContentAnalyzer, GeminiClient, TextGenerator};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Application state shared across requests.
///
/// The analyzer is `None` when no Gemini credential is configured; the
/// handler reports that per-request instead of failing Lambda startup.
struct AppState<G> {
    analyzer: Option<ContentAnalyzer<G>>,
}

impl AppState<GeminiClient> {
    fn new() -> Self {
        let config = Config::from_env();
        let analyzer = match GeminiClient::from_config(&config) {
            Ok(client) => Some(ContentAnalyzer::new(client)),
            Err(e) => {
                error!("Gemini client unavailable: {}", e);
                None
            }
        };
        Self { analyzer }
    }
}

async fn handler<G: TextGenerator>(
    state: Arc<AppState<G>>,
    event: Request,
) -> Result<Response<Body>, Error> {
    if event.method() == Method::OPTIONS {
        return Ok(preflight_response());
    }

    // Parse request body; a missing `content` field fails deserialization
    // and is reported the same way as an absent body.
    let request: AnalyzeRequest = match event.payload() {
        Ok(Some(request)) => request,
        Ok(None) => return error_response(400, "Content is required"),
        Err(e) => {
            error!("Invalid request body: {}", e);
            return error_response(400, "Content is required");
        }
    };

    if request.content.trim().is_empty() {
        return error_response(400, "Content is required");
    }

    // Credential gate, checked before any network call.
    let Some(analyzer) = state.analyzer.as_ref() else {
        error!("GEMINI_API_KEY is not configured");
        return error_response(500, "Gemini API key not configured");
    };

    info!(
        "Analyzing {:?} content ({} chars)",
        request.content_type,
        request.content.len()
    );

    match analyzer.analyze(request).await {
        Ok(result) => json_response(200, &result),
        Err(e) => {
            error!("Analysis failed: {}", e);
            error_response(e.status_code(), e.public_message())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new());

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
