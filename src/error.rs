//! Error types for the dirsnap snapshot system.

use std::path::PathBuf;
use thiserror::Error;

/// Snapshot-related errors.
///
/// Duplicate-key insertion is deliberately absent from this taxonomy: dropping
/// an already-present canonical key is policy, reported through
/// [`crate::tree::InsertOutcome`], not an error.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed listing line {line}: {content:?}")]
    MalformedListing { line: usize, content: String },

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl SnapshotError {
    /// Attach the offending path to an underlying I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SnapshotError::Io {
            path: path.into(),
            source,
        }
    }
}
