//! Free-text question compared after normalization

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::error::AnswerError;
use super::{QuestionId, QuizItem};

/// Anything that is neither a word character nor whitespace
static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static regex is valid"));

/// A question answered with a short piece of text
#[derive(Debug)]
pub struct ShortAnswer {
    id: QuestionId,
    question: String,
    answer: String,
    case_sensitive: bool,
}

impl ShortAnswer {
    pub fn new(question: impl Into<String>, answer: impl Into<String>, case_sensitive: bool) -> Self {
        Self {
            id: QuestionId::new(),
            question: question.into(),
            answer: answer.into(),
            case_sensitive,
        }
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Canonical form used on both sides of the comparison
    fn normalize(&self, text: &str) -> String {
        let trimmed = text.trim();
        let folded = if self.case_sensitive {
            trimmed.to_string()
        } else {
            trimmed.to_lowercase()
        };
        PUNCTUATION.replace_all(&folded, "").into_owned()
    }
}

impl QuizItem for ShortAnswer {
    fn id(&self) -> &QuestionId {
        &self.id
    }

    fn text(&self) -> &str {
        &self.question
    }

    fn check_answer(&self, raw: &str) -> Result<bool, AnswerError> {
        let expected = self.normalize(&self.answer);
        let given = self.normalize(raw);
        debug!(id = %self.id, %expected, %given, "ShortAnswer::check_answer");
        Ok(expected == given)
    }

    fn incorrect_feedback(&self) -> String {
        format!("Incorrect. The correct answer is: {}", self.answer)
    }
}
