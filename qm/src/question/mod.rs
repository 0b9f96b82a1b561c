//! Quiz questions
//!
//! Every question type implements [`QuizItem`]: it renders a prompt, grades a
//! raw answer string, and explains the right answer after a miss. The closed
//! set of supported types is the [`Question`] enum, which is what the box
//! scheduler stores.
//!
//! Questions are built from loosely typed JSON records:
//!
//! ```json
//! {"type": "shortanswer", "question": "2+2", "correct_answer": "4", "case_sensitive": false}
//! {"type": "truefalse", "question": "Sky is blue", "correct_answer": true, "explanation": "..."}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use uuid::Uuid;

mod error;
mod short_answer;
mod true_false;

pub use error::{AnswerError, RecordError};
pub use short_answer::ShortAnswer;
pub use true_false::{TrueFalse, parse_bool};

/// Stable identity of a question for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(Uuid);

impl QuestionId {
    /// Allocate a fresh, unique id
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for QuestionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capabilities shared by every question type
pub trait QuizItem {
    /// Identity used as the box-membership key
    fn id(&self) -> &QuestionId;

    /// The bare question text
    fn text(&self) -> &str;

    /// Prompt shown to the learner
    fn ask(&self) -> String {
        self.text().to_string()
    }

    /// Grade a raw answer
    ///
    /// `Ok(false)` is a wrong answer; `Err` means the input was not a valid
    /// answer for this question type at all.
    fn check_answer(&self, raw: &str) -> Result<bool, AnswerError>;

    /// Message revealing the correct answer
    fn incorrect_feedback(&self) -> String;
}

/// Record type labels
pub const SHORT_ANSWER: &str = "shortanswer";
pub const TRUE_FALSE: &str = "truefalse";

/// Any supported question
#[derive(Debug)]
pub enum Question {
    ShortAnswer(ShortAnswer),
    TrueFalse(TrueFalse),
}

impl Question {
    /// Build a question from an input record
    pub fn from_record(record: &Value) -> Result<Self, RecordError> {
        let fields = record.as_object().ok_or(RecordError::NotAnObject)?;
        let kind = fields.get("type").and_then(Value::as_str).unwrap_or_default();
        debug!(kind, "Question::from_record");

        match kind {
            SHORT_ANSWER => {
                let question = required_str(fields, "question")?;
                let answer = match required(fields, "correct_answer")? {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    _ => {
                        return Err(RecordError::InvalidField {
                            field: "correct_answer",
                            expected: "a string",
                        });
                    }
                };
                let case_sensitive = optional_bool(fields, "case_sensitive")?.unwrap_or(false);
                Ok(Self::ShortAnswer(ShortAnswer::new(question, answer, case_sensitive)))
            }
            TRUE_FALSE => {
                let question = required_str(fields, "question")?;
                let answer = required(fields, "correct_answer")?
                    .as_bool()
                    .ok_or(RecordError::NotBoolean)?;
                let explanation = optional_str(fields, "explanation")?.unwrap_or_default();
                Ok(Self::TrueFalse(TrueFalse::new(question, answer, explanation)))
            }
            other => Err(RecordError::UnsupportedType(match fields.get("type") {
                Some(Value::String(_)) => other.to_string(),
                None | Some(Value::Null) => "None".to_string(),
                Some(value) => value.to_string(),
            })),
        }
    }

    /// Record type label for this question
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ShortAnswer(_) => SHORT_ANSWER,
            Self::TrueFalse(_) => TRUE_FALSE,
        }
    }
}

impl QuizItem for Question {
    fn id(&self) -> &QuestionId {
        match self {
            Self::ShortAnswer(q) => q.id(),
            Self::TrueFalse(q) => q.id(),
        }
    }

    fn text(&self) -> &str {
        match self {
            Self::ShortAnswer(q) => q.text(),
            Self::TrueFalse(q) => q.text(),
        }
    }

    fn ask(&self) -> String {
        match self {
            Self::ShortAnswer(q) => q.ask(),
            Self::TrueFalse(q) => q.ask(),
        }
    }

    fn check_answer(&self, raw: &str) -> Result<bool, AnswerError> {
        match self {
            Self::ShortAnswer(q) => q.check_answer(raw),
            Self::TrueFalse(q) => q.check_answer(raw),
        }
    }

    fn incorrect_feedback(&self) -> String {
        match self {
            Self::ShortAnswer(q) => q.incorrect_feedback(),
            Self::TrueFalse(q) => q.incorrect_feedback(),
        }
    }
}

impl From<ShortAnswer> for Question {
    fn from(q: ShortAnswer) -> Self {
        Self::ShortAnswer(q)
    }
}

impl From<TrueFalse> for Question {
    fn from(q: TrueFalse) -> Self {
        Self::TrueFalse(q)
    }
}

fn required<'a>(fields: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, RecordError> {
    match fields.get(field) {
        None | Some(Value::Null) => Err(RecordError::MissingField(field)),
        Some(value) => Ok(value),
    }
}

fn required_str(fields: &Map<String, Value>, field: &'static str) -> Result<String, RecordError> {
    required(fields, field)?
        .as_str()
        .map(str::to_string)
        .ok_or(RecordError::InvalidField {
            field,
            expected: "a string",
        })
}

fn optional_str(fields: &Map<String, Value>, field: &'static str) -> Result<Option<String>, RecordError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(RecordError::InvalidField {
            field,
            expected: "a string",
        }),
    }
}

fn optional_bool(fields: &Map<String, Value>, field: &'static str) -> Result<Option<bool>, RecordError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(RecordError::InvalidField {
            field,
            expected: "a boolean",
        }),
    }
}
