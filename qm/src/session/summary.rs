//! Session results

use serde::{Deserialize, Serialize};

use crate::events::AnswerOutcome;

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEnd {
    /// No question left outside `Known`
    Completed,
    /// Quit command or end of input
    Quit,
}

impl std::fmt::Display for SessionEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::Quit => write!(f, "quit"),
        }
    }
}

/// Tally of graded turns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub asked: usize,
    pub correct: usize,
    pub incorrect: usize,
    /// Answers that could not be parsed; also counted in `incorrect`
    pub invalid: usize,
}

impl SessionSummary {
    pub fn record(&mut self, outcome: &AnswerOutcome) {
        self.asked += 1;
        match outcome {
            AnswerOutcome::Correct => self.correct += 1,
            AnswerOutcome::Incorrect => self.incorrect += 1,
            AnswerOutcome::Invalid { .. } => {
                self.incorrect += 1;
                self.invalid += 1;
            }
        }
    }

    /// Share of graded turns answered correctly, 0.0 when nothing was graded
    pub fn accuracy(&self) -> f64 {
        if self.asked == 0 {
            0.0
        } else {
            self.correct as f64 / self.asked as f64
        }
    }
}

/// What [`Session::run`](super::Session::run) hands back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub ended: SessionEnd,
    pub summary: SessionSummary,
}
