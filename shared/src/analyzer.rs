//! Content-analysis orchestration.
//!
//! Drives the three Gemini calls behind `analyze`: a mandatory summary step
//! followed by best-effort flashcard and quiz generation. Only the summary
//! step can fail the operation; the other two degrade to empty collections.

use tracing::{info, warn};

use crate::gemini::TextGenerator;
use crate::models::{AnalysisResult, AnalyzeRequest, Flashcard, QuizQuestion};
use crate::{parse, prompts, Error, Result};

/// Placeholder used when Gemini answers the summary call with no text.
const NO_SUMMARY_PLACEHOLDER: &str = "No summary generated";

/// Orchestrates the summary, flashcard, and quiz calls for one request.
///
/// Stateless across invocations; each call owns its whole request/response
/// lifecycle.
pub struct ContentAnalyzer<G> {
    generator: G,
}

impl<G: TextGenerator> ContentAnalyzer<G> {
    /// Create an analyzer over the given text generator.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Analyze the submitted content.
    ///
    /// Fails with a validation error on empty content and an upstream error
    /// when the summary call does not succeed. Flashcard and quiz failures
    /// are absorbed into empty collections, never surfaced to the caller.
    pub async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalysisResult> {
        if request.content.trim().is_empty() {
            return Err(Error::Validation("content is missing or empty".to_string()));
        }

        let prompt = prompts::summary_prompt(&request.content, request.content_type);
        let summary = self.generator.generate_text(&prompt).await?;
        let summary = if summary.is_empty() {
            NO_SUMMARY_PLACEHOLDER.to_string()
        } else {
            summary
        };

        info!(
            "Summary generated for {:?} content ({} chars)",
            request.content_type,
            summary.len()
        );

        // Flashcards and quiz both depend only on the summary, so the two
        // calls run concurrently.
        let (flashcards, quiz_questions) = tokio::join!(
            self.generate_flashcards(&summary),
            self.generate_quiz_questions(&summary),
        );

        Ok(AnalysisResult {
            summary,
            flashcards,
            quiz_questions,
            original_content: request.content,
            content_type: request.content_type,
        })
    }

    async fn generate_flashcards(&self, summary: &str) -> Vec<Flashcard> {
        let prompt = prompts::flashcard_prompt(summary);
        match self.generator.generate_text(&prompt).await {
            Ok(text) => parse::parse_flashcards(&text),
            Err(e) => {
                warn!("Flashcard generation failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn generate_quiz_questions(&self, summary: &str) -> Vec<QuizQuestion> {
        let prompt = prompts::quiz_prompt(summary);
        match self.generator.generate_text(&prompt).await {
            Ok(text) => parse::parse_quiz_questions(&text),
            Err(e) => {
                warn!("Quiz generation failed: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentType;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const SUMMARY_TEXT: &str = "Photosynthesis converts light energy into chemical energy.";

    const FLASHCARD_JSON: &str = r#"{"flashcards":[{"front":"What does photosynthesis produce?","back":"Glucose and oxygen"},{"front":"Where does it happen?","back":"Chloroplasts"}]}"#;

    const QUIZ_JSON: &str = r#"{"questions":[{"question":"What pigment absorbs light?","options":["Chlorophyll","Keratin","Melanin","Hemoglobin"],"correctAnswer":0},{"question":"What gas is consumed?","options":["Oxygen","Carbon dioxide","Nitrogen","Hydrogen"],"correctAnswer":1},{"question":"Where does the Calvin cycle run?","options":["Stroma","Thylakoid","Cytoplasm","Nucleus"],"correctAnswer":0}]}"#;

    /// Scripted generator routing each prompt to its canned response.
    ///
    /// Prompts are routed by the wording of the templates: the flashcard
    /// prompt mentions "flashcards", the quiz prompt "quiz questions", and
    /// the summary prompt neither.
    struct StubGenerator {
        summary: Mutex<Option<Result<String>>>,
        flashcards: Mutex<Option<Result<String>>>,
        quiz: Mutex<Option<Result<String>>>,
        calls: AtomicUsize,
    }

    impl StubGenerator {
        fn new(
            summary: Result<String>,
            flashcards: Result<String>,
            quiz: Result<String>,
        ) -> Self {
            Self {
                summary: Mutex::new(Some(summary)),
                flashcards: Mutex::new(Some(flashcards)),
                quiz: Mutex::new(Some(quiz)),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate_text(&self, prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let slot = if prompt.contains("flashcards") {
                &self.flashcards
            } else if prompt.contains("quiz questions") {
                &self.quiz
            } else {
                &self.summary
            };
            slot.lock()
                .unwrap()
                .take()
                .expect("prompt issued more than once")
        }
    }

    fn request(content: &str, content_type: ContentType) -> AnalyzeRequest {
        AnalyzeRequest {
            content: content.to_string(),
            content_type,
        }
    }

    #[tokio::test]
    async fn test_full_analysis_round_trip() {
        let generator = StubGenerator::new(
            Ok(SUMMARY_TEXT.to_string()),
            Ok(FLASHCARD_JSON.to_string()),
            Ok(QUIZ_JSON.to_string()),
        );
        let analyzer = ContentAnalyzer::new(generator);

        let result = analyzer
            .analyze(request(
                "Photosynthesis converts light to energy",
                ContentType::Notes,
            ))
            .await
            .unwrap();

        assert_eq!(result.summary, SUMMARY_TEXT);
        assert_eq!(result.flashcards.len(), 2);
        assert_eq!(result.quiz_questions.len(), 3);
        assert_eq!(result.original_content, "Photosynthesis converts light to energy");
        assert_eq!(result.content_type, ContentType::Notes);
        assert_eq!(analyzer.generator.call_count(), 3);
    }

    #[tokio::test]
    async fn test_empty_content_fails_before_any_call() {
        let generator = StubGenerator::new(
            Ok(SUMMARY_TEXT.to_string()),
            Ok(FLASHCARD_JSON.to_string()),
            Ok(QUIZ_JSON.to_string()),
        );
        let analyzer = ContentAnalyzer::new(generator);

        let err = analyzer
            .analyze(request("   ", ContentType::Generic))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(analyzer.generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_summary_failure_halts_the_operation() {
        let generator = StubGenerator::new(
            Err(Error::Upstream("Gemini API returned 503".to_string())),
            Ok(FLASHCARD_JSON.to_string()),
            Ok(QUIZ_JSON.to_string()),
        );
        let analyzer = ContentAnalyzer::new(generator);

        let err = analyzer
            .analyze(request("some notes", ContentType::Notes))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Upstream(_)));
        // Steps 2 and 3 must never run after a summary failure.
        assert_eq!(analyzer.generator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_summary_uses_placeholder() {
        let generator = StubGenerator::new(
            Ok(String::new()),
            Ok("{}".to_string()),
            Ok("{}".to_string()),
        );
        let analyzer = ContentAnalyzer::new(generator);

        let result = analyzer
            .analyze(request("some notes", ContentType::Generic))
            .await
            .unwrap();

        assert_eq!(result.summary, "No summary generated");
        assert!(result.flashcards.is_empty());
        assert!(result.quiz_questions.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_flashcards_degrade_without_failing() {
        let generator = StubGenerator::new(
            Ok(SUMMARY_TEXT.to_string()),
            Ok("this is not JSON".to_string()),
            Ok(QUIZ_JSON.to_string()),
        );
        let analyzer = ContentAnalyzer::new(generator);

        let result = analyzer
            .analyze(request("some notes", ContentType::Notes))
            .await
            .unwrap();

        assert!(result.flashcards.is_empty());
        assert_eq!(result.quiz_questions.len(), 3);
    }

    #[tokio::test]
    async fn test_best_effort_call_failures_degrade_independently() {
        let generator = StubGenerator::new(
            Ok(SUMMARY_TEXT.to_string()),
            Err(Error::Upstream("Gemini API returned 429".to_string())),
            Ok(QUIZ_JSON.to_string()),
        );
        let analyzer = ContentAnalyzer::new(generator);

        let result = analyzer
            .analyze(request("some notes", ContentType::Youtube))
            .await
            .unwrap();

        assert!(result.flashcards.is_empty());
        assert_eq!(result.quiz_questions.len(), 3);
        assert_eq!(result.summary, SUMMARY_TEXT);
        assert_eq!(analyzer.generator.call_count(), 3);
    }

    #[tokio::test]
    async fn test_fenced_model_output_still_parses() {
        let generator = StubGenerator::new(
            Ok(SUMMARY_TEXT.to_string()),
            Ok(format!("```json\n{}\n```", FLASHCARD_JSON)),
            Ok(format!("```json\n{}\n```", QUIZ_JSON)),
        );
        let analyzer = ContentAnalyzer::new(generator);

        let result = analyzer
            .analyze(request("some notes", ContentType::Notes))
            .await
            .unwrap();

        assert_eq!(result.flashcards.len(), 2);
        assert_eq!(result.quiz_questions.len(), 3);
    }
}
