//! Error types for the sampler and the session saver.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Sampler failure. Every variant aborts the run; nothing is written.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read stimuli from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed stimuli in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("stimulus at index {index} is not a JSON object")]
    NotAnObject { index: usize },

    /// A label or stimulus was requested past the end of its sequence.
    #[error("{sequence} index {index} out of range (length {len})")]
    IndexOutOfRange {
        sequence: &'static str,
        index: usize,
        len: usize,
    },

    #[error("failed to serialize sampled stimuli: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Session save failure. The handler turns each of these into a 500 whose
/// body carries the display text.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error(
        "unsupported media type: request content type was {}, expected 'application/json'",
        .0.as_deref().map_or_else(|| "missing".to_string(), |t| format!("'{t}'"))
    )]
    UnsupportedContentType(Option<String>),

    #[error("failed to decode JSON object: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to serialize session payload: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
