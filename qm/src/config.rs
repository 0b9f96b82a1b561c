//! Configuration for quizme

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Answer that ends the session without grading
    #[serde(default = "default_quit_command")]
    pub quit_command: String,

    /// Print every box's size after each answer
    #[serde(default = "default_show_box_counts")]
    pub show_box_counts: bool,

    /// Write this session's events to a JSONL file
    #[serde(default)]
    pub event_log: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_quit_command() -> String {
    crate::session::DEFAULT_QUIT_COMMAND.to_string()
}

fn default_show_box_counts() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quit_command: default_quit_command(),
            show_box_counts: default_show_box_counts(),
            event_log: None,
            log_level: None,
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from(config_path);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("quizme").join("config.yml")),
            Some(PathBuf::from("quizme.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::load_from(path);
            }
        }

        debug!("Config::load: no config file, using defaults");
        Ok(Config::default())
    }

    fn load_from(path: &Path) -> Result<Self> {
        debug!(?path, "Config::load_from");
        let content = std::fs::read_to_string(path).context(format!("Failed to read config {}", path.display()))?;
        let config: Config =
            serde_yaml::from_str(&content).context(format!("Failed to parse config {}", path.display()))?;
        if config.quit_command.is_empty() {
            return Err(eyre::eyre!("quit_command must not be empty ({})", path.display()));
        }
        Ok(config)
    }
}
