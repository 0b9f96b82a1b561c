//! Leitner box scheduling
//!
//! Questions live in exactly one of five boxes. Selection always takes the head
//! of the highest-priority non-empty box; `Known` is never served.
//!
//! ```text
//! Unasked ──ok──▶ CorrectOnce ──ok──▶ CorrectTwice ──ok──▶ Known
//! Missed  ──ok──▶ CorrectOnce
//! any     ──miss─▶ Missed
//! ```

mod kind;
mod manager;
mod review_box;

pub use kind::BoxKind;
pub use manager::{BoxCounts, BoxManager, ScheduleError, Transition};
pub use review_box::ReviewBox;
