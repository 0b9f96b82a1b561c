//! CLI argument parsing for quizme

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qm")]
#[command(author, version, about = "Adaptive quiz with Leitner-box review", long_about = None)]
pub struct Cli {
    /// Your name
    #[arg(required = true)]
    pub name: String,

    /// Path to the question data file (JSON array)
    #[arg(short, long, required = true)]
    pub questions: PathBuf,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Write this session's events to a JSONL file
    #[arg(long)]
    pub event_log: Option<PathBuf>,

    /// Don't print box sizes after each answer
    #[arg(long)]
    pub quiet_boxes: bool,
}
