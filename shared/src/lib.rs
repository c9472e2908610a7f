//! Shared library for StudyBuddy Lambda functions.
//!
//! This crate provides the content-analysis orchestrator, the Gemini client,
//! and the common models and helpers used by the Lambda entry points.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod gemini;
pub mod http;
pub mod models;
pub mod parse;
pub mod prompts;

pub use analyzer::ContentAnalyzer;
pub use config::Config;
pub use error::{Error, Result};
pub use gemini::{GeminiClient, TextGenerator};
pub use models::{AnalysisResult, AnalyzeRequest, ContentType, Flashcard, QuizQuestion};
