//! Todo repository
//!
//! Keeps SQL out of the UI. The shell talks to a `TodoRepository`; the
//! SQLite implementation runs exactly one statement per call.

use super::error::StorageError;
use super::storage::DatabaseConnection;
use crate::model::{NewTodo, TodoItem};
use rusqlite::{params, Row};

/// Storage operations on todo items
pub trait TodoRepository {
    /// Insert a todo and return it with its new id
    fn create(&self, todo: &NewTodo) -> Result<TodoItem, StorageError>;

    /// Todos whose label equals `label` exactly
    fn find_by_label(&self, label: &str) -> Result<Vec<TodoItem>, StorageError>;

    /// Overwrite label and date of the todo with `id`, returning rows affected
    fn update(&self, id: i64, todo: &NewTodo) -> Result<usize, StorageError>;

    /// Delete the todo with `id`, returning rows affected (0 if it did not exist)
    fn delete(&self, id: i64) -> Result<usize, StorageError>;

    /// Every todo in storage order
    fn list_all(&self) -> Result<Vec<TodoItem>, StorageError>;
}

/// `TodoRepository` backed by the `todos` table
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    db: DatabaseConnection,
}

impl SqliteTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn parse_row(row: &Row) -> rusqlite::Result<TodoItem> {
        Ok(TodoItem {
            id: row.get(0)?,
            label: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            due_date: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        })
    }
}

impl TodoRepository for SqliteTodoRepository {
    fn create(&self, todo: &NewTodo) -> Result<TodoItem, StorageError> {
        let conn = self.db.connect()?;
        conn.execute(
            "INSERT INTO todos (Todo, Date) VALUES (?1, ?2)",
            params![todo.label, todo.due_date],
        )?;
        let id = conn.last_insert_rowid();

        Ok(TodoItem {
            id,
            label: todo.label.clone(),
            due_date: todo.due_date.clone(),
        })
    }

    fn find_by_label(&self, label: &str) -> Result<Vec<TodoItem>, StorageError> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare("SELECT Id, Todo, Date FROM todos WHERE Todo = ?1")?;
        let todos = stmt
            .query_map(params![label], Self::parse_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(todos)
    }

    fn update(&self, id: i64, todo: &NewTodo) -> Result<usize, StorageError> {
        let conn = self.db.connect()?;
        let rows = conn.execute(
            "UPDATE todos SET Todo = ?1, Date = ?2 WHERE Id = ?3",
            params![todo.label, todo.due_date, id],
        )?;
        Ok(rows)
    }

    fn delete(&self, id: i64) -> Result<usize, StorageError> {
        let conn = self.db.connect()?;
        let rows = conn.execute("DELETE FROM todos WHERE Id = ?1", params![id])?;
        Ok(rows)
    }

    fn list_all(&self) -> Result<Vec<TodoItem>, StorageError> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare("SELECT Id, Todo, Date FROM todos")?;
        let todos = stmt
            .query_map([], Self::parse_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(todos)
    }
}
