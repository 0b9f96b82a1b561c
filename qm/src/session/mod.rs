//! Interactive review session
//!
//! [`Session`] owns the [`BoxManager`](crate::boxes::BoxManager) for one run and
//! talks to the learner only through the [`Console`] trait, so the whole loop
//! can be driven headlessly with a [`ScriptedConsole`].

mod console;
mod controller;
mod summary;

pub use console::{BoxCountReporter, Console, Notice, ScriptedConsole, TerminalConsole};
pub use controller::{ANSWER_PROMPT, COMPLETE_MESSAGE, DEFAULT_QUIT_COMMAND, FAREWELL_MESSAGE, Session, Step};
pub use summary::{SessionEnd, SessionReport, SessionSummary};
