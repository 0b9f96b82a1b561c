//! Event types for quiz session activity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::boxes::{BoxCounts, BoxKind, Transition};
use crate::question::QuestionId;
use crate::session::{SessionEnd, SessionSummary};

/// Everything observable that happens during a session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// Questions are loaded and the first prompt is about to be shown
    SessionStarted { learner: String, question_count: usize },
    /// A question was presented
    QuestionAsked {
        question_id: QuestionId,
        from_box: BoxKind,
        prompt: String,
    },
    /// The learner's answer was graded
    AnswerGraded {
        question_id: QuestionId,
        outcome: AnswerOutcome,
    },
    /// A question changed boxes
    QuestionMoved {
        question_id: QuestionId,
        from: BoxKind,
        to: BoxKind,
        counts: BoxCounts,
    },
    /// The session is over
    SessionFinished { ended: SessionEnd, summary: SessionSummary },
}

impl SessionEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            SessionEvent::SessionStarted { .. } => "SessionStarted",
            SessionEvent::QuestionAsked { .. } => "QuestionAsked",
            SessionEvent::AnswerGraded { .. } => "AnswerGraded",
            SessionEvent::QuestionMoved { .. } => "QuestionMoved",
            SessionEvent::SessionFinished { .. } => "SessionFinished",
        }
    }

    /// Question this event concerns, if any
    pub fn question_id(&self) -> Option<&QuestionId> {
        match self {
            SessionEvent::QuestionAsked { question_id, .. }
            | SessionEvent::AnswerGraded { question_id, .. }
            | SessionEvent::QuestionMoved { question_id, .. } => Some(question_id),
            SessionEvent::SessionStarted { .. } | SessionEvent::SessionFinished { .. } => None,
        }
    }
}

impl From<Transition> for SessionEvent {
    fn from(t: Transition) -> Self {
        SessionEvent::QuestionMoved {
            question_id: t.question_id,
            from: t.from,
            to: t.to,
            counts: t.counts,
        }
    }
}

/// How an answer was graded
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome_type")]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// The input was not a valid answer; scheduled as incorrect
    Invalid { error: String },
}

impl AnswerOutcome {
    /// Correctness used for scheduling
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }
}

/// A timestamped event for file persistence
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventLogEntry {
    #[serde(rename = "ts")]
    pub timestamp: DateTime<Utc>,
    pub event: SessionEvent,
}

impl EventLogEntry {
    /// Create a new log entry with current timestamp
    pub fn new(event: SessionEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type() {
        let event = SessionEvent::SessionStarted {
            learner: "ada".to_string(),
            question_count: 2,
        };
        assert_eq!(event.event_type(), "SessionStarted");
        assert!(event.question_id().is_none());
    }

    #[test]
    fn test_transition_becomes_question_moved() {
        let id = QuestionId::new();
        let event = SessionEvent::from(Transition {
            question_id: id.clone(),
            from: BoxKind::Unasked,
            to: BoxKind::CorrectOnce,
            counts: BoxCounts {
                correct_once: 1,
                ..Default::default()
            },
        });
        assert_eq!(event.event_type(), "QuestionMoved");
        assert_eq!(event.question_id(), Some(&id));
    }

    #[test]
    fn test_graded_event_serialization() {
        let event = SessionEvent::AnswerGraded {
            question_id: QuestionId::new(),
            outcome: AnswerOutcome::Invalid {
                error: "Answer must be 'True' or 'False'.".to_string(),
            },
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"AnswerGraded\""));
        assert!(json.contains("\"outcome_type\":\"Invalid\""));

        let parsed: SessionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_moved_event_carries_box_names() {
        let event = SessionEvent::QuestionMoved {
            question_id: QuestionId::new(),
            from: BoxKind::CorrectTwice,
            to: BoxKind::Missed,
            counts: BoxCounts::default(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"from\":\"correct_twice\""));
        assert!(json.contains("\"to\":\"missed\""));
    }

    #[test]
    fn test_invalid_outcome_is_not_correct() {
        assert!(AnswerOutcome::Correct.is_correct());
        assert!(!AnswerOutcome::Incorrect.is_correct());
        assert!(
            !AnswerOutcome::Invalid {
                error: "bad".to_string()
            }
            .is_correct()
        );
    }

    #[test]
    fn test_event_log_entry_timestamp() {
        let before = Utc::now();
        let entry = EventLogEntry::new(SessionEvent::SessionStarted {
            learner: "ada".to_string(),
            question_count: 0,
        });
        let after = Utc::now();

        assert!(entry.timestamp >= before);
        assert!(entry.timestamp <= after);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"ts\""));
    }
}
