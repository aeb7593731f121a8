//! Persistence for todo items
//!
//! - Connection handling and schema setup for the SQLite file
//! - The `TodoRepository` used by the UI

pub mod error;
pub mod repository;
pub mod storage;

pub use error::StorageError;
pub use repository::{SqliteTodoRepository, TodoRepository};
pub use storage::{DatabaseConnection, DEFAULT_DATABASE_FILE};
