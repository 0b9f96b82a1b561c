//! Question file loading
//!
//! A question file is a JSON array of records. Records that are incomplete or
//! of an unknown type are skipped and reported; a file that cannot be read or
//! parsed, or a true/false record whose answer is not a boolean, aborts the load.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use eyre::{Context, Result};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::question::{Question, RecordError};

/// A record that did not make it into the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Position in the input array
    pub index: usize,
    pub error: RecordError,
}

/// Questions built from a batch of records
#[derive(Debug, Default)]
pub struct LoadReport {
    pub questions: Vec<Question>,
    pub skipped: Vec<SkippedRecord>,
}

/// Read the raw records from a JSON file
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Value>> {
    let path = path.as_ref();
    debug!(?path, "load_records");

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(eyre::eyre!("Question file not found at {}", path.display()));
        }
        Err(e) => return Err(e).context(format!("Failed to read question file {}", path.display())),
    };

    let value: Value =
        serde_json::from_str(&content).context(format!("Invalid JSON in question file {}", path.display()))?;
    match value {
        Value::Array(records) => {
            info!(count = records.len(), ?path, "Loaded question records");
            Ok(records)
        }
        _ => Err(eyre::eyre!(
            "Invalid question file {}: expected a JSON array of questions",
            path.display()
        )),
    }
}

/// Turn records into questions, skipping the ones that cannot be used
pub fn build_questions(records: &[Value]) -> Result<LoadReport, RecordError> {
    let mut report = LoadReport::default();
    for (index, record) in records.iter().enumerate() {
        match Question::from_record(record) {
            Ok(question) => report.questions.push(question),
            Err(error) if error.is_fatal() => {
                warn!(index, %error, "build_questions: fatal record");
                return Err(error);
            }
            Err(error) => {
                warn!(index, %error, "build_questions: skipping record");
                report.skipped.push(SkippedRecord { index, error });
            }
        }
    }
    debug!(
        built = report.questions.len(),
        skipped = report.skipped.len(),
        "build_questions"
    );
    Ok(report)
}

/// Load a question file and build its questions
pub fn load_questions(path: impl AsRef<Path>) -> Result<LoadReport> {
    let path = path.as_ref();
    let records = load_records(path)?;
    build_questions(&records).context(format!("Invalid question in {}", path.display()))
}
