//! Whole-file JSON persistence for classification events.

use crate::error::{Error, Result};
use crate::lexicon::EmotionLabel;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default location of the persisted emotion log.
pub const DEFAULT_LOG_PATH: &str = "emotion_log.json";

/// One classification event. Timestamps are local-time naive and serialize
/// as ISO-8601 text with sub-second precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionRecord {
    pub emotion: EmotionLabel,
    pub timestamp: NaiveDateTime,
}

/// Append-only event log persisted as a pretty-printed JSON array.
///
/// Every append loads the full file, pushes the record, and rewrites the
/// whole file. Not atomic; assumes a single process and a single writer.
#[derive(Debug, Clone)]
pub struct EventLogStore {
    path: PathBuf,
}

impl EventLogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every record in insertion order. A missing file is an empty
    /// store; a present-but-unparseable file is a hard failure.
    pub fn load_all(&self) -> Result<Vec<EmotionRecord>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "log absent, treating as empty store");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&text).map_err(|source| Error::MalformedLog {
            path: self.path.clone(),
            source,
        })
    }

    /// Appends one record by rewriting the whole file. A malformed existing
    /// log aborts the append before anything is written.
    pub fn append(&self, record: EmotionRecord) -> Result<()> {
        let mut records = self.load_all()?;
        records.push(record);
        fs::write(&self.path, serde_json::to_string_pretty(&records)?)?;
        debug!(path = %self.path.display(), total = records.len(), "log rewritten");
        Ok(())
    }
}
