//! A single FIFO box of questions

use std::collections::VecDeque;
use std::time::Duration;

use super::{BoxKind, ScheduleError};
use crate::question::{Question, QuestionId, QuizItem};

/// Ordered questions sharing a review tier; the head is served next
#[derive(Debug)]
pub struct ReviewBox {
    kind: BoxKind,
    questions: VecDeque<Question>,
}

impl ReviewBox {
    pub fn new(kind: BoxKind) -> Self {
        Self {
            kind,
            questions: VecDeque::new(),
        }
    }

    pub fn kind(&self) -> BoxKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn priority_interval(&self) -> Option<Duration> {
        self.kind.priority_interval()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Append to the back of the queue
    pub fn add_question(&mut self, question: Question) {
        self.questions.push_back(question);
    }

    /// Take a member out of the box, wherever it sits
    pub fn remove_question(&mut self, id: &QuestionId) -> Result<Question, ScheduleError> {
        let position = self.questions.iter().position(|q| q.id() == id);
        position
            .and_then(|i| self.questions.remove(i))
            .ok_or_else(|| ScheduleError::NotInBox {
                id: id.clone(),
                kind: self.kind,
            })
    }

    /// Oldest member, left in place
    pub fn next_priority_question(&self) -> Option<&Question> {
        self.questions.front()
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.questions.iter().any(|q| q.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
