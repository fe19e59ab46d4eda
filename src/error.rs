//! Error handling types and utilities.

use std::path::PathBuf;

/// Error returned when loading a search index snapshot fails.
///
/// There is no partial or degraded index: any load failure means the caller
/// must abort initialization. Neither variant is retryable with the same
/// input.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot is not a well-formed sequence of search records.
    #[error("malformed snapshot: {reason}")]
    MalformedSnapshot { reason: String },

    /// The snapshot file could not be read from disk.
    #[error("failed to read snapshot at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SnapshotError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedSnapshot {
            reason: reason.into(),
        }
    }
}
