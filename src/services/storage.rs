//! Storage accessor for the local SQLite file
//!
//! Every operation opens its own connection and drops it when done.
//! Statements run in autocommit mode, so a mutation is committed as soon
//! as `execute` returns.

use super::error::StorageError;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Default database file, relative to the working directory
pub const DEFAULT_DATABASE_FILE: &str = "database.db";

const CREATE_TODOS_TABLE: &str = "CREATE TABLE IF NOT EXISTS todos (
    Id INTEGER PRIMARY KEY AUTOINCREMENT,
    Todo TEXT,
    Date TEXT
)";

/// Opens connections to a fixed database file
#[derive(Debug, Clone)]
pub struct DatabaseConnection {
    path: PathBuf,
}

impl Default for DatabaseConnection {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_FILE)
    }
}

impl DatabaseConnection {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a live connection, creating the file if it does not exist
    pub fn connect(&self) -> Result<Connection, StorageError> {
        Connection::open(&self.path).map_err(|e| StorageError::open(&self.path, e))
    }

    /// Create the `todos` table when missing. An existing table is left as is.
    pub fn ensure_schema(&self) -> Result<(), StorageError> {
        let conn = self.connect()?;
        conn.execute_batch(CREATE_TODOS_TABLE)?;
        tracing::debug!(path = %self.path.display(), "todos schema ready");
        Ok(())
    }
}
