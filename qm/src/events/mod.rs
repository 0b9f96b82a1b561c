//! Session observability
//!
//! The session loop emits a [`SessionEvent`] for every prompt, grade and box
//! move. Consumers implement [`EventSink`] and are registered on the session;
//! the scheduling core itself never prints.
//!
//! ```text
//!            Session
//!               │ SessionEvent
//!       ┌───────┴────────┐
//!       ▼                ▼
//! BoxCountReporter   EventLogger
//!   (console)        (.jsonl)
//! ```

mod logger;
mod types;

pub use logger::{EventLogger, read_events};
pub use types::{AnswerOutcome, EventLogEntry, SessionEvent};

/// Consumer of session events
pub trait EventSink {
    fn handle(&mut self, event: &SessionEvent) -> eyre::Result<()>;
}

/// Collects events in memory
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: Vec<SessionEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }
}

impl EventSink for EventRecorder {
    fn handle(&mut self, event: &SessionEvent) -> eyre::Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}
