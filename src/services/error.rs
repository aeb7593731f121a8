//! Storage error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the todo store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to open database {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("database query failed: {0}")]
    Query(#[from] rusqlite::Error),
}

impl StorageError {
    pub fn open(path: impl Into<PathBuf>, source: rusqlite::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}
