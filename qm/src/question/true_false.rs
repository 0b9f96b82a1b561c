//! True/False question

use tracing::debug;

use super::error::AnswerError;
use super::{QuestionId, QuizItem};

/// A question whose answer is a boolean
#[derive(Debug)]
pub struct TrueFalse {
    id: QuestionId,
    question: String,
    answer: bool,
    explanation: String,
}

impl TrueFalse {
    pub fn new(question: impl Into<String>, answer: bool, explanation: impl Into<String>) -> Self {
        Self {
            id: QuestionId::new(),
            question: question.into(),
            answer,
            explanation: explanation.into(),
        }
    }

    pub fn answer(&self) -> bool {
        self.answer
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

/// Parse learner input into a boolean
///
/// Accepts `true`/`t`/`false`/`f` in any case, surrounded by any whitespace.
pub fn parse_bool(raw: &str) -> Result<bool, AnswerError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "t" => Ok(true),
        "false" | "f" => Ok(false),
        _ => Err(AnswerError::NotBoolean { input: raw.to_string() }),
    }
}

impl QuizItem for TrueFalse {
    fn id(&self) -> &QuestionId {
        &self.id
    }

    fn text(&self) -> &str {
        &self.question
    }

    fn ask(&self) -> String {
        format!("{} (True/False)", self.question)
    }

    fn check_answer(&self, raw: &str) -> Result<bool, AnswerError> {
        let given = parse_bool(raw)?;
        debug!(id = %self.id, expected = self.answer, given, "TrueFalse::check_answer");
        Ok(given == self.answer)
    }

    fn incorrect_feedback(&self) -> String {
        if self.explanation.is_empty() {
            "Incorrect.".to_string()
        } else {
            format!("Incorrect. {}", self.explanation)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_long_and_short_forms() {
        assert_eq!(parse_bool("True"), Ok(true));
        assert_eq!(parse_bool("t"), Ok(true));
        assert_eq!(parse_bool("FALSE"), Ok(false));
        assert_eq!(parse_bool("f"), Ok(false));
        assert_eq!(parse_bool("  T \n"), Ok(true));
    }

    #[test]
    fn test_parse_bool_rejects_other_text() {
        let err = parse_bool("maybe").unwrap_err();
        assert_eq!(
            err,
            AnswerError::NotBoolean {
                input: "maybe".to_string()
            }
        );
        assert!(parse_bool("").is_err());
        assert!(parse_bool("yes").is_err());
        assert!(parse_bool("tru").is_err());
    }

    #[test]
    fn test_check_answer() {
        let q = TrueFalse::new("Sky is blue", true, "");
        assert_eq!(q.check_answer("true"), Ok(true));
        assert_eq!(q.check_answer("F"), Ok(false));
        assert!(q.check_answer("maybe").is_err());
    }

    #[test]
    fn test_ask_appends_hint() {
        let q = TrueFalse::new("Sky is blue", true, "");
        assert_eq!(q.ask(), "Sky is blue (True/False)");
    }

    #[test]
    fn test_incorrect_feedback() {
        let bare = TrueFalse::new("Sky is green", false, "");
        assert_eq!(bare.incorrect_feedback(), "Incorrect.");

        let explained = TrueFalse::new("Sky is green", false, "Rayleigh scattering makes it blue.");
        assert_eq!(
            explained.incorrect_feedback(),
            "Incorrect. Rayleigh scattering makes it blue."
        );
    }
}
