//! Box manager - owns the boxes and applies the promotion policy

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::{BoxKind, ReviewBox};
use crate::question::{Question, QuestionId, QuizItem};

/// Bookkeeping faults; these indicate a bug, not bad input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("question {0} is not tracked by the box manager")]
    UnknownQuestion(QuestionId),

    #[error("question {id} is not in box '{kind}'")]
    NotInBox { id: QuestionId, kind: BoxKind },
}

/// Number of questions in each box
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxCounts {
    pub missed: usize,
    pub unasked: usize,
    pub correct_once: usize,
    pub correct_twice: usize,
    pub known: usize,
}

impl BoxCounts {
    pub fn get(&self, kind: BoxKind) -> usize {
        match kind {
            BoxKind::Missed => self.missed,
            BoxKind::Unasked => self.unasked,
            BoxKind::CorrectOnce => self.correct_once,
            BoxKind::CorrectTwice => self.correct_twice,
            BoxKind::Known => self.known,
        }
    }

    fn slot(&mut self, kind: BoxKind) -> &mut usize {
        match kind {
            BoxKind::Missed => &mut self.missed,
            BoxKind::Unasked => &mut self.unasked,
            BoxKind::CorrectOnce => &mut self.correct_once,
            BoxKind::CorrectTwice => &mut self.correct_twice,
            BoxKind::Known => &mut self.known,
        }
    }

    /// Counts in box order
    pub fn iter(&self) -> impl Iterator<Item = (BoxKind, usize)> + '_ {
        BoxKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    pub fn total(&self) -> usize {
        self.iter().map(|(_, n)| n).sum()
    }

    /// Questions still waiting to be served
    pub fn remaining(&self) -> usize {
        BoxKind::SERVED.iter().map(|kind| self.get(*kind)).sum()
    }
}

/// Result of relocating a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub question_id: QuestionId,
    pub from: BoxKind,
    pub to: BoxKind,
    /// Box sizes after the move
    pub counts: BoxCounts,
}

/// Owns all boxes and knows where every question lives
#[derive(Debug)]
pub struct BoxManager {
    boxes: [ReviewBox; 5],
    locations: HashMap<QuestionId, BoxKind>,
}

impl BoxManager {
    /// Create a manager with five empty boxes
    pub fn new() -> Self {
        Self {
            boxes: BoxKind::ALL.map(ReviewBox::new),
            locations: HashMap::new(),
        }
    }

    /// Create a manager with every question placed in `Unasked`, in order
    pub fn with_questions(questions: impl IntoIterator<Item = Question>) -> Self {
        let mut manager = Self::new();
        for question in questions {
            manager.add_new_question(question);
        }
        info!(count = manager.len(), "BoxManager: questions placed");
        manager
    }

    /// Place a freshly loaded question at the back of `Unasked`
    pub fn add_new_question(&mut self, question: Question) {
        let id = question.id().clone();
        debug!(%id, kind = question.kind(), "BoxManager::add_new_question");
        self.boxes[BoxKind::Unasked.index()].add_question(question);
        self.locations.insert(id, BoxKind::Unasked);
    }

    /// Head of the highest-priority non-empty box, never from `Known`
    pub fn next_question(&self) -> Option<&Question> {
        BoxKind::SERVED
            .iter()
            .find_map(|kind| self.boxes[kind.index()].next_priority_question())
    }

    /// Relocate a question according to the outcome of its last answer
    pub fn move_question(&mut self, id: &QuestionId, answered_correctly: bool) -> Result<Transition, ScheduleError> {
        let from = self
            .location(id)
            .ok_or_else(|| ScheduleError::UnknownQuestion(id.clone()))?;
        let question = self.boxes[from.index()].remove_question(id)?;
        let to = from.after(answered_correctly);

        self.boxes[to.index()].add_question(question);
        self.locations.insert(id.clone(), to);

        let counts = self.box_counts();
        debug!(%id, %from, %to, answered_correctly, ?counts, "BoxManager::move_question");
        Ok(Transition {
            question_id: id.clone(),
            from,
            to,
            counts,
        })
    }

    /// Box a question currently sits in
    pub fn location(&self, id: &QuestionId) -> Option<BoxKind> {
        self.locations.get(id).copied()
    }

    pub fn get_box(&self, kind: BoxKind) -> &ReviewBox {
        &self.boxes[kind.index()]
    }

    pub fn boxes(&self) -> impl Iterator<Item = &ReviewBox> {
        self.boxes.iter()
    }

    pub fn box_counts(&self) -> BoxCounts {
        let mut counts = BoxCounts::default();
        for b in &self.boxes {
            *counts.slot(b.kind()) = b.len();
        }
        counts
    }

    /// Total questions tracked
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl Default for BoxManager {
    fn default() -> Self {
        Self::new()
    }
}
