//! Best-effort extraction of structured study aids from model output.
//!
//! Model responses are free text and not guaranteed well-formed. Any failure
//! here degrades to an empty collection and is only visible in the logs;
//! nothing in this module returns an error.

use serde::Deserialize;
use tracing::warn;

use crate::models::{Flashcard, QuizQuestion};

#[derive(Debug, Deserialize)]
struct FlashcardDocument {
    #[serde(default)]
    flashcards: Vec<Flashcard>,
}

#[derive(Debug, Deserialize)]
struct QuizDocument {
    #[serde(default)]
    questions: Vec<QuizQuestion>,
}

/// Strip a surrounding markdown code fence, if present.
///
/// Gemini frequently wraps JSON answers in ```json fences even when asked
/// for raw JSON.
fn strip_markdown_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    match rest.rfind("```") {
        Some(end) => rest[..end].trim(),
        None => trimmed,
    }
}

/// Parse flashcards out of model text, degrading to empty on any failure.
pub fn parse_flashcards(text: &str) -> Vec<Flashcard> {
    match serde_json::from_str::<FlashcardDocument>(strip_markdown_fence(text)) {
        Ok(document) => document.flashcards,
        Err(e) => {
            warn!("Failed to parse flashcards: {}", e);
            Vec::new()
        }
    }
}

/// Parse quiz questions out of model text, degrading to empty on any failure.
pub fn parse_quiz_questions(text: &str) -> Vec<QuizQuestion> {
    match serde_json::from_str::<QuizDocument>(strip_markdown_fence(text)) {
        Ok(document) => document.questions,
        Err(e) => {
            warn!("Failed to parse quiz questions: {}", e);
            Vec::new()
        }
    }
}
