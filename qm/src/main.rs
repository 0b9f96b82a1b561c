use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;

use quizme::cli::Cli;
use quizme::config::Config;
use quizme::{BoxCountReporter, BoxManager, EventLogger, Session, TerminalConsole, loader};

fn parse_level(level: &str) -> tracing::Level {
    match level.to_uppercase().as_str() {
        "TRACE" => tracing::Level::TRACE,
        "DEBUG" => tracing::Level::DEBUG,
        "INFO" => tracing::Level::INFO,
        "WARN" | "WARNING" => tracing::Level::WARN,
        "ERROR" => tracing::Level::ERROR,
        _ => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", level);
            tracing::Level::WARN
        }
    }
}

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > WARN
    let level = cli_log_level
        .or(config_log_level)
        .map(parse_level)
        .unwrap_or(tracing::Level::WARN);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize logging: {}", e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    info!(learner = %cli.name, questions = ?cli.questions, "quizme starting");

    println!("Welcome, {}! Let's start your adaptive quiz session.", cli.name.cyan());

    let report = loader::load_questions(&cli.questions).wrap_err("Exiting due to error in loading questions.")?;
    for skipped in &report.skipped {
        println!("{} {}. Skipping this question.", "⚠".yellow(), skipped.error);
    }

    let manager = BoxManager::with_questions(report.questions);
    let mut reporter = BoxCountReporter::stdout();
    let mut event_log = cli
        .event_log
        .as_ref()
        .or(config.event_log.as_ref())
        .map(EventLogger::open)
        .transpose()?;

    let mut session = Session::new(manager, TerminalConsole::new()?)
        .with_quit_command(&config.quit_command)
        .with_learner(&cli.name);
    if config.show_box_counts && !cli.quiet_boxes {
        session = session.with_sink(&mut reporter);
    }
    if let Some(logger) = event_log.as_mut() {
        session = session.with_sink(logger);
    }

    let outcome = session.run()?;
    let summary = outcome.summary;
    println!(
        "{} asked, {} correct, {} incorrect ({} invalid), {:.0}% accuracy",
        summary.asked.to_string().cyan(),
        summary.correct.to_string().green(),
        summary.incorrect.to_string().red(),
        summary.invalid,
        summary.accuracy() * 100.0
    );

    Ok(())
}
