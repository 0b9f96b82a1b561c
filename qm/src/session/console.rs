//! Console adapters - the only place the session touches a terminal

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, StdinLock, Write};

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::events::{EventSink, SessionEvent};

/// A line of output for the learner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Question(String),
    Correct,
    Incorrect(String),
    Invalid(String),
}

impl Notice {
    /// Uncolored text
    pub fn text(&self) -> String {
        match self {
            Notice::Info(s) | Notice::Question(s) | Notice::Incorrect(s) => s.clone(),
            Notice::Correct => "Correct!".to_string(),
            Notice::Invalid(err) => format!("Invalid input: {}", err),
        }
    }
}

/// Learner-facing I/O used by the session loop
pub trait Console {
    /// Show `prompt` and read one line; `None` when input is exhausted
    fn read_answer(&mut self, prompt: &str) -> Result<Option<String>>;

    fn show(&mut self, notice: &Notice) -> Result<()>;
}

enum Input {
    Editor(DefaultEditor),
    Lines(StdinLock<'static>),
}

/// Stdin/stdout console; line editing when attached to a terminal
pub struct TerminalConsole {
    input: Input,
}

impl TerminalConsole {
    pub fn new() -> Result<Self> {
        let stdin = io::stdin();
        let input = if stdin.is_terminal() {
            let editor = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;
            Input::Editor(editor)
        } else {
            Input::Lines(stdin.lock())
        };
        Ok(Self { input })
    }
}

impl Console for TerminalConsole {
    fn read_answer(&mut self, prompt: &str) -> Result<Option<String>> {
        match &mut self.input {
            Input::Editor(rl) => match rl.readline(prompt) {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    Ok(Some(line))
                }
                Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => {
                    debug!("TerminalConsole: input closed");
                    Ok(None)
                }
                Err(err) => Err(eyre::eyre!("Readline error: {}", err)),
            },
            Input::Lines(stdin) => {
                let mut out = io::stdout().lock();
                write!(out, "{}", prompt)?;
                out.flush()?;

                // Raw bytes: undecodable input is graded, not fatal
                let mut buf = Vec::new();
                if stdin.read_until(b'\n', &mut buf)? == 0 {
                    debug!("TerminalConsole: end of input");
                    writeln!(out)?;
                    return Ok(None);
                }
                let line = String::from_utf8_lossy(&buf);
                Ok(Some(strip_line_ending(&line).to_string()))
            }
        }
    }

    fn show(&mut self, notice: &Notice) -> Result<()> {
        let text = notice.text();
        let styled = match notice {
            Notice::Info(_) => text.normal(),
            Notice::Question(_) => text.bold(),
            Notice::Correct => text.green().bold(),
            Notice::Incorrect(_) => text.red(),
            Notice::Invalid(_) => text.yellow(),
        };
        writeln!(io::stdout().lock(), "{}", styled)?;
        Ok(())
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Console fed from a fixed list of answers, recording everything shown
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<Notice>,
    prompts: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn transcript(&self) -> &[Notice] {
        &self.transcript
    }

    /// Number of times an answer was requested
    pub fn prompts(&self) -> usize {
        self.prompts
    }
}

impl Console for ScriptedConsole {
    fn read_answer(&mut self, _prompt: &str) -> Result<Option<String>> {
        self.prompts += 1;
        Ok(self.answers.pop_front())
    }

    fn show(&mut self, notice: &Notice) -> Result<()> {
        self.transcript.push(notice.clone());
        Ok(())
    }
}

/// Prints every box's size after each move
pub struct BoxCountReporter<W: Write> {
    out: W,
}

impl<W: Write> BoxCountReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl BoxCountReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> EventSink for BoxCountReporter<W> {
    fn handle(&mut self, event: &SessionEvent) -> Result<()> {
        if let SessionEvent::QuestionMoved { counts, .. } = event {
            for (kind, count) in counts.iter() {
                writeln!(self.out, "{}", format!("{} has {} questions", kind.name(), count).dimmed())?;
            }
            self.out.flush()?;
        }
        Ok(())
    }
}
