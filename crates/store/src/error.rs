use std::path::PathBuf;

use thiserror::Error;

use missionstock_core::DomainError;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record would not survive a save/load round trip; nothing was written.
    #[error("record {id} cannot be saved: {source}")]
    Unstorable {
        id: String,
        #[source]
        source: DomainError,
    },

    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode snapshot {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported snapshot format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
