use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default bank endpoint; override with the QUIZ_BANK_URL env var.
pub const DEFAULT_BANK_URL: &str = "http://127.0.0.1:8000/questions.json";

/// How many questions one run may hold at most.
pub const QUESTIONS_PER_QUIZ: usize = 50;

/// One record from the external question bank.
///
/// `options` is displayed as an ordered list but treated as a set;
/// `correct` must be a non-empty subset of `options` (checked when the
/// question is first shown, see [`crate::session::QuizSession`]).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub correct: Vec<String>,
}

#[derive(Clone, Debug)]
pub enum AppState {
    Loading,
    Quiz,
    Summary,
    LoadFailed,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading
    }
}

/// A question record with unusable content (empty text, no options, or no
/// correct answer surviving the options filter). The question is not
/// rendered and the session stalls on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid question data.")]
pub struct DataIntegrityError {
    pub index: usize,
}

/// The only external tunables: where the bank lives and how many questions
/// one run samples.
#[derive(Clone, Debug)]
pub struct QuizConfig {
    pub bank_url: String,
    pub questions_per_quiz: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            bank_url: DEFAULT_BANK_URL.to_string(),
            questions_per_quiz: QUESTIONS_PER_QUIZ,
        }
    }
}

impl QuizConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("QUIZ_BANK_URL") {
            if !url.trim().is_empty() {
                config.bank_url = url;
            }
        }
        if let Ok(max) = std::env::var("QUIZ_MAX_QUESTIONS") {
            if let Ok(max) = max.parse::<usize>() {
                if max > 0 {
                    config.questions_per_quiz = max;
                }
            }
        }
        config
    }
}
