//! Error types shared across the crate.

use crate::lexicon::EmotionLabel;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The persisted log exists but does not parse. Propagated as-is; the
    /// file is never rewritten or repaired after a failed load.
    #[error("emotion log {path} is malformed: {source}")]
    MalformedLog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No quote pool for the label. Unreachable with the built-in lexicon;
    /// callers substitute a fallback message instead of exiting.
    #[error("no quotes available for emotion '{0}'")]
    NoQuotes(EmotionLabel),

    #[error("chart rendering failed: {0}")]
    Chart(String),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
