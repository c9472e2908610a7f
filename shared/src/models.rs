//! Shared data models.

use serde::{Deserialize, Serialize};

/// Kind of study material submitted for analysis.
///
/// Unrecognized tags (and a missing `type` field) fall back to `Generic`,
/// which selects the general-purpose summary prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// A YouTube video URL
    Youtube,
    /// Typed or pasted study notes
    Notes,
    /// Anything else (uploaded files, unknown tags)
    #[default]
    #[serde(other)]
    Generic,
}

/// Analysis request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub content: String,
    #[serde(rename = "type", default)]
    pub content_type: ContentType,
}

/// A question/answer study card. Cards have no identity beyond their
/// position; duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

/// A four-option multiple-choice question. `correct_answer` indexes into
/// `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: u8,
}

/// Analysis response payload, returned as one unit.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub flashcards: Vec<Flashcard>,
    #[serde(rename = "quizQuestions")]
    pub quiz_questions: Vec<QuizQuestion>,
    #[serde(rename = "originalContent")]
    pub original_content: String,
    #[serde(rename = "contentType")]
    pub content_type: ContentType,
}
