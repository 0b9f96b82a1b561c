//! QuizMe - adaptive quiz with Leitner-box review
//!
//! Questions are loaded from a JSON file into the `Unasked` box. Each turn the
//! session serves the head of the highest-priority non-empty box, grades the
//! answer, and moves the question: up one box on a correct answer, straight to
//! `Missed` on a wrong one. Questions that reach `Known` are retired.
//!
//! # Architecture
//!
//! ```text
//! loader ──▶ Question ──▶ BoxManager ◀──▶ Session ──▶ Console
//!                                            │
//!                                            ▼
//!                                        EventSink (box counts, JSONL log)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use quizme::{BoxManager, ScriptedConsole, Session, loader};
//!
//! let report = loader::load_questions("quiz.json")?;
//! let manager = BoxManager::with_questions(report.questions);
//! let mut session = Session::new(manager, ScriptedConsole::new(["4", "true"]));
//! let outcome = session.run()?;
//! ```

pub mod boxes;
pub mod cli;
pub mod config;
pub mod events;
pub mod loader;
pub mod question;
pub mod session;

pub use boxes::{BoxCounts, BoxKind, BoxManager, ReviewBox, ScheduleError, Transition};
pub use config::Config;
pub use events::{AnswerOutcome, EventLogger, EventSink, SessionEvent};
pub use loader::{LoadReport, SkippedRecord};
pub use question::{AnswerError, Question, QuestionId, QuizItem, RecordError, ShortAnswer, TrueFalse};
pub use session::{
    BoxCountReporter, Console, ScriptedConsole, Session, SessionEnd, SessionReport, SessionSummary, TerminalConsole,
};
