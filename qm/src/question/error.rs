//! Question errors
//!
//! Two families: problems with a submitted answer (recoverable, one turn) and
//! problems with an input record (reported at load time).

use thiserror::Error;

/// A submitted answer could not be interpreted in the question's answer domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("Answer must be 'True' or 'False'.")]
    NotBoolean { input: String },
}

/// An input record could not be turned into a question
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("Missing required field for question: '{0}'")]
    MissingField(&'static str),

    #[error("Unsupported question type: {0}")]
    UnsupportedType(String),

    #[error("field '{field}' must be {expected}")]
    InvalidField { field: &'static str, expected: &'static str },

    #[error("The answer must be a boolean (True or False).")]
    NotBoolean,
}

impl RecordError {
    /// Whether this error invalidates the whole input source rather than one record
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NotBoolean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_non_boolean_answer_is_fatal() {
        assert!(RecordError::NotBoolean.is_fatal());
        assert!(!RecordError::NotAnObject.is_fatal());
        assert!(!RecordError::MissingField("question").is_fatal());
        assert!(!RecordError::UnsupportedType("essay".to_string()).is_fatal());
        assert!(
            !RecordError::InvalidField {
                field: "case_sensitive",
                expected: "a boolean"
            }
            .is_fatal()
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            RecordError::MissingField("correct_answer").to_string(),
            "Missing required field for question: 'correct_answer'"
        );
        assert_eq!(
            RecordError::UnsupportedType("essay".to_string()).to_string(),
            "Unsupported question type: essay"
        );
        let err = AnswerError::NotBoolean {
            input: "maybe".to_string(),
        };
        assert_eq!(err.to_string(), "Answer must be 'True' or 'False'.");
    }
}
