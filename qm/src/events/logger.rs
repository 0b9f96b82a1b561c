//! Event logger - trace of one session as a JSONL file

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use tracing::{debug, warn};

use super::EventSink;
use super::types::{EventLogEntry, SessionEvent};

/// Writes every event as one timestamped JSON line
pub struct EventLogger {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl EventLogger {
    /// Create the log file, replacing any trace left by an earlier run
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context(format!("Failed to create event log directory: {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .context(format!("Failed to open event log: {}", path.display()))?;
        debug!(?path, "EventLogger::open");
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an event as a JSON line
    pub fn write_event(&mut self, event: &SessionEvent) -> Result<()> {
        let entry = EventLogEntry::new(event.clone());
        let json = serde_json::to_string(&entry)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl EventSink for EventLogger {
    fn handle(&mut self, event: &SessionEvent) -> Result<()> {
        self.write_event(event)
    }
}

/// Read events back from a log file, skipping lines that fail to parse
pub fn read_events(path: impl AsRef<Path>) -> Result<Vec<EventLogEntry>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).context(format!("Failed to read event log: {}", path.display()))?;
    let mut entries = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<EventLogEntry>(line) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                warn!(line, error = %e, "read_events: failed to parse line");
            }
        }
    }
    Ok(entries)
}
