//! Prompt templates for the three Gemini calls.

use crate::models::ContentType;

/// Build the summary prompt for the submitted content.
pub fn summary_prompt(content: &str, content_type: ContentType) -> String {
    match content_type {
        ContentType::Youtube => format!(
            "Analyze this YouTube video URL and provide a comprehensive study summary. \
             Extract key concepts, main points, and learning objectives: {}",
            content
        ),
        ContentType::Notes => format!(
            "Analyze these study notes and create a comprehensive summary with key concepts, \
             important points, and main takeaways: {}",
            content
        ),
        ContentType::Generic => format!(
            "Analyze this study material and provide a comprehensive summary with key concepts, \
             important points, and main takeaways: {}",
            content
        ),
    }
}

/// Build the flashcard prompt. Takes the generated summary, not the original
/// content.
pub fn flashcard_prompt(summary: &str) -> String {
    format!(
        "Based on this content, create 5-7 educational flashcards in JSON format. Each flashcard \
         should have a \"front\" (question) and \"back\" (answer). Format as: \
         {{\"flashcards\": [{{\"front\": \"question\", \"back\": \"answer\"}}]}}. Content: {}",
        summary
    )
}

/// Build the quiz prompt. Takes the generated summary, not the original
/// content.
pub fn quiz_prompt(summary: &str) -> String {
    format!(
        "Based on this content, create 3-5 multiple choice quiz questions in JSON format. Each \
         question should have a \"question\", \"options\" array with 4 choices, and \
         \"correctAnswer\" (0-3 index). Format as: {{\"questions\": [{{\"question\": \"...\", \
         \"options\": [\"A\", \"B\", \"C\", \"D\"], \"correctAnswer\": 0}}]}}. Content: {}",
        summary
    )
}
