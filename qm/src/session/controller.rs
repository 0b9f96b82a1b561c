//! Session loop - drives one learner through the boxes

use eyre::{Context, Result};
use tracing::{debug, info};

use super::console::{Console, Notice};
use super::summary::{SessionEnd, SessionReport, SessionSummary};
use crate::boxes::BoxManager;
use crate::events::{AnswerOutcome, EventSink, SessionEvent};
use crate::question::QuizItem;

/// Default quit command
pub const DEFAULT_QUIT_COMMAND: &str = "q";

pub const ANSWER_PROMPT: &str = "Please enter answer here: ";
pub const COMPLETE_MESSAGE: &str = "All questions have been reviewed. Session complete!";
pub const FAREWELL_MESSAGE: &str = "Thank you, goodbye!";

/// Result of a single turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A question was graded and moved
    Answered(AnswerOutcome),
    Finished(SessionEnd),
}

/// One interactive review session
pub struct Session<'a, C: Console> {
    manager: BoxManager,
    console: C,
    sinks: Vec<&'a mut dyn EventSink>,
    quit_command: String,
    learner: String,
    summary: SessionSummary,
}

impl<'a, C: Console> Session<'a, C> {
    pub fn new(manager: BoxManager, console: C) -> Self {
        Self {
            manager,
            console,
            sinks: Vec::new(),
            quit_command: DEFAULT_QUIT_COMMAND.to_string(),
            learner: String::new(),
            summary: SessionSummary::default(),
        }
    }

    /// Input that ends the session without grading
    pub fn with_quit_command(mut self, quit_command: impl Into<String>) -> Self {
        self.quit_command = quit_command.into();
        self
    }

    pub fn with_learner(mut self, learner: impl Into<String>) -> Self {
        self.learner = learner.into();
        self
    }

    /// Register an event consumer
    pub fn with_sink(mut self, sink: &'a mut dyn EventSink) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn manager(&self) -> &BoxManager {
        &self.manager
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Run turns until every question is known or the learner quits
    pub fn run(&mut self) -> Result<SessionReport> {
        info!(learner = %self.learner, questions = self.manager.len(), "Session starting");
        self.emit(&SessionEvent::SessionStarted {
            learner: self.learner.clone(),
            question_count: self.manager.len(),
        })?;
        self.console.show(&Notice::Info(format!(
            "Type '{}' at any time to quit the session.",
            self.quit_command
        )))?;

        let ended = loop {
            if let Step::Finished(ended) = self.step()? {
                break ended;
            }
        };

        self.console.show(&Notice::Info(FAREWELL_MESSAGE.to_string()))?;
        self.emit(&SessionEvent::SessionFinished {
            ended,
            summary: self.summary,
        })?;
        info!(%ended, summary = ?self.summary, "Session finished");

        Ok(SessionReport {
            ended,
            summary: self.summary,
        })
    }

    /// Play one turn
    pub fn step(&mut self) -> Result<Step> {
        let Some(question) = self.manager.next_question() else {
            self.console.show(&Notice::Info(COMPLETE_MESSAGE.to_string()))?;
            return Ok(Step::Finished(SessionEnd::Completed));
        };
        let question_id = question.id().clone();
        let prompt = question.ask();
        let from_box = self
            .manager
            .location(&question_id)
            .ok_or_else(|| eyre::eyre!("served question {} has no box", question_id))?;

        emit_all(
            &mut self.sinks,
            &SessionEvent::QuestionAsked {
                question_id: question_id.clone(),
                from_box,
                prompt: prompt.clone(),
            },
        )?;
        self.console.show(&Notice::Question(prompt))?;

        let Some(answer) = self.console.read_answer(ANSWER_PROMPT)? else {
            debug!(%question_id, "Session: input exhausted");
            return Ok(Step::Finished(SessionEnd::Quit));
        };
        if answer == self.quit_command {
            debug!(%question_id, "Session: quit requested");
            return Ok(Step::Finished(SessionEnd::Quit));
        }

        let (outcome, notice) = match question.check_answer(&answer) {
            Ok(true) => (AnswerOutcome::Correct, Notice::Correct),
            Ok(false) => (AnswerOutcome::Incorrect, Notice::Incorrect(question.incorrect_feedback())),
            Err(err) => (
                AnswerOutcome::Invalid { error: err.to_string() },
                Notice::Invalid(err.to_string()),
            ),
        };
        debug!(%question_id, ?outcome, "Session: graded");
        self.console.show(&notice)?;
        self.summary.record(&outcome);
        emit_all(
            &mut self.sinks,
            &SessionEvent::AnswerGraded {
                question_id: question_id.clone(),
                outcome: outcome.clone(),
            },
        )?;

        let transition = self
            .manager
            .move_question(&question_id, outcome.is_correct())
            .context("Box bookkeeping is inconsistent")?;
        emit_all(&mut self.sinks, &SessionEvent::from(transition))?;

        Ok(Step::Answered(outcome))
    }

    fn emit(&mut self, event: &SessionEvent) -> Result<()> {
        emit_all(&mut self.sinks, event)
    }
}

fn emit_all(sinks: &mut [&mut dyn EventSink], event: &SessionEvent) -> Result<()> {
    for sink in sinks.iter_mut() {
        sink.handle(event)
            .context(format!("Failed to deliver {} event", event.event_type()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxes::BoxKind;
    use crate::events::EventRecorder;
    use crate::question::{Question, QuestionId, ShortAnswer, TrueFalse};
    use crate::session::ScriptedConsole;

    fn two_questions() -> (BoxManager, QuestionId, QuestionId) {
        let sum: Question = ShortAnswer::new("2+2", "4", false).into();
        let sky: Question = TrueFalse::new("Sky is blue", true, "").into();
        let (sum_id, sky_id) = (sum.id().clone(), sky.id().clone());
        (BoxManager::with_questions([sum, sky]), sum_id, sky_id)
    }

    fn next_id<C: Console>(session: &Session<'_, C>) -> Option<QuestionId> {
        session.manager().next_question().map(|q| q.id().clone())
    }

    #[test]
    fn test_missed_question_jumps_the_queue() {
        let (manager, sum_id, sky_id) = two_questions();
        let mut session = Session::new(manager, ScriptedConsole::new(["4", "false"]));

        assert_eq!(next_id(&session), Some(sum_id.clone()));
        assert_eq!(session.step().unwrap(), Step::Answered(AnswerOutcome::Correct));
        assert_eq!(session.manager().location(&sum_id), Some(BoxKind::CorrectOnce));

        assert_eq!(next_id(&session), Some(sky_id.clone()));
        assert_eq!(session.step().unwrap(), Step::Answered(AnswerOutcome::Incorrect));
        assert_eq!(session.manager().location(&sky_id), Some(BoxKind::Missed));

        // Missed outranks CorrectOnce even though the short answer loaded first
        assert_eq!(next_id(&session), Some(sky_id));
    }

    #[test]
    fn test_invalid_answer_demotes_to_missed() {
        let sky: Question = TrueFalse::new("Sky is blue", true, "").into();
        let sky_id = sky.id().clone();
        let mut session = Session::new(BoxManager::with_questions([sky]), ScriptedConsole::new(["maybe"]));

        let step = session.step().unwrap();
        assert!(matches!(step, Step::Answered(AnswerOutcome::Invalid { .. })));
        assert_eq!(session.manager().location(&sky_id), Some(BoxKind::Missed));
        assert_eq!(
            session.console().transcript().last(),
            Some(&Notice::Invalid("Answer must be 'True' or 'False'.".to_string()))
        );
        assert_eq!(session.summary().invalid, 1);
    }

    #[test]
    fn test_quit_leaves_boxes_untouched() {
        let (manager, sum_id, _) = two_questions();
        let mut session = Session::new(manager, ScriptedConsole::new(["q", "4"]));

        let report = session.run().unwrap();
        assert_eq!(report.ended, SessionEnd::Quit);
        assert_eq!(report.summary.asked, 0);
        assert_eq!(session.manager().location(&sum_id), Some(BoxKind::Unasked));
        assert_eq!(session.console().prompts(), 1);
    }

    #[test]
    fn test_quit_command_is_exact() {
        let (manager, sum_id, _) = two_questions();
        let mut session = Session::new(manager, ScriptedConsole::new([" q"])).with_quit_command("q");

        assert!(matches!(session.step().unwrap(), Step::Answered(_)));
        assert_eq!(session.manager().location(&sum_id), Some(BoxKind::Missed));
    }

    #[test]
    fn test_custom_quit_command() {
        let (manager, _, _) = two_questions();
        let mut session = Session::new(manager, ScriptedConsole::new(["exit"])).with_quit_command("exit");
        assert_eq!(session.step().unwrap(), Step::Finished(SessionEnd::Quit));
    }

    #[test]
    fn test_end_of_input_quits() {
        let (manager, _, _) = two_questions();
        let mut session = Session::new(manager, ScriptedConsole::new(Vec::<String>::new()));
        let report = session.run().unwrap();
        assert_eq!(report.ended, SessionEnd::Quit);
    }

    #[test]
    fn test_run_to_completion() {
        let (manager, sum_id, sky_id) = two_questions();
        // Three correct answers each retire both questions
        let answers = ["4", "t", "4", "t", "4", "t"];
        let mut session = Session::new(manager, ScriptedConsole::new(answers));

        let report = session.run().unwrap();
        assert_eq!(report.ended, SessionEnd::Completed);
        assert_eq!(report.summary.asked, 6);
        assert_eq!(report.summary.correct, 6);
        assert_eq!(session.manager().location(&sum_id), Some(BoxKind::Known));
        assert_eq!(session.manager().location(&sky_id), Some(BoxKind::Known));

        let transcript = session.console().transcript();
        assert_eq!(
            transcript.first(),
            Some(&Notice::Info("Type 'q' at any time to quit the session.".to_string()))
        );
        let tail: Vec<Notice> = transcript[transcript.len() - 2..].to_vec();
        assert_eq!(
            tail,
            vec![
                Notice::Info(COMPLETE_MESSAGE.to_string()),
                Notice::Info(FAREWELL_MESSAGE.to_string())
            ]
        );
    }

    #[test]
    fn test_empty_session_completes_immediately() {
        let mut session = Session::new(BoxManager::new(), ScriptedConsole::new(["unused"]));
        let report = session.run().unwrap();
        assert_eq!(report.ended, SessionEnd::Completed);
        assert_eq!(session.console().prompts(), 0);
    }

    #[test]
    fn test_feedback_on_wrong_answer() {
        let sum: Question = ShortAnswer::new("2+2", "4", false).into();
        let mut session = Session::new(BoxManager::with_questions([sum]), ScriptedConsole::new(["5"]));
        session.step().unwrap();
        let transcript = session.console().transcript();
        assert_eq!(transcript[0], Notice::Question("2+2".to_string()));
        assert_eq!(
            transcript[1],
            Notice::Incorrect("Incorrect. The correct answer is: 4".to_string())
        );
    }

    #[test]
    fn test_events_follow_each_turn() {
        let (manager, sum_id, _) = two_questions();
        let mut recorder = EventRecorder::new();
        {
            let mut session = Session::new(manager, ScriptedConsole::new(["4", "q"]))
                .with_learner("ada")
                .with_sink(&mut recorder);
            session.run().unwrap();
        }

        let types: Vec<&str> = recorder.events().iter().map(|e| e.event_type()).collect();
        assert_eq!(
            types,
            vec![
                "SessionStarted",
                "QuestionAsked",
                "AnswerGraded",
                "QuestionMoved",
                "QuestionAsked",
                "SessionFinished"
            ]
        );

        match &recorder.events()[3] {
            SessionEvent::QuestionMoved {
                question_id,
                from,
                to,
                counts,
            } => {
                assert_eq!(question_id, &sum_id);
                assert_eq!((*from, *to), (BoxKind::Unasked, BoxKind::CorrectOnce));
                assert_eq!(counts.unasked, 1);
                assert_eq!(counts.correct_once, 1);
            }
            other => panic!("expected QuestionMoved, got {:?}", other),
        }

        match recorder.events().last() {
            Some(SessionEvent::SessionFinished { ended, summary }) => {
                assert_eq!(*ended, SessionEnd::Quit);
                assert_eq!(summary.correct, 1);
            }
            other => panic!("expected SessionFinished, got {:?}", other),
        }
    }
}
