//! Action enum - All possible application actions
//!
//! Components turn key and mouse events into Actions; the App applies them.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Idle tick, no event arrived within the poll window
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Table Navigation
    // ─────────────────────────────────────────────────────────────────────────
    NextRow,
    PrevRow,
    FirstRow,
    LastRow,
    /// Select a row by its position in the table
    SelectRow(usize),
    /// Reload every row from storage
    Reload,

    // ─────────────────────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────────────────────
    OpenAddDialog,
    OpenSearchDialog,
    OpenEditDialog,
    OpenDeleteDialog,
    OpenAbout,
    OpenHelp,
    OpenQuitDialog,
    /// Open a drop-down of the menu bar by index (File, Edit, Help)
    OpenMenu(usize),
    /// Close the top modal
    CloseModal,
    /// Confirm the top modal (yes, or activate a menu entry)
    ConfirmModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Storage
    // ─────────────────────────────────────────────────────────────────────────
    /// Insert a todo with label and ISO date
    AddTodo { label: String, due_date: String },
    /// Highlight rows whose label equals the query
    SearchTodos(String),
    /// Update the todo captured when the edit dialog opened
    UpdateTodo {
        id: i64,
        label: String,
        due_date: String,
    },
    /// Delete the todo captured when the delete dialog opened
    DeleteTodo(i64),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextRow => write!(f, "NextRow"),
            Action::PrevRow => write!(f, "PrevRow"),
            Action::FirstRow => write!(f, "FirstRow"),
            Action::LastRow => write!(f, "LastRow"),
            Action::SelectRow(row) => write!(f, "SelectRow({})", row),
            Action::Reload => write!(f, "Reload"),
            Action::OpenAddDialog => write!(f, "OpenAddDialog"),
            Action::OpenSearchDialog => write!(f, "OpenSearchDialog"),
            Action::OpenEditDialog => write!(f, "OpenEditDialog"),
            Action::OpenDeleteDialog => write!(f, "OpenDeleteDialog"),
            Action::OpenAbout => write!(f, "OpenAbout"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenMenu(index) => write!(f, "OpenMenu({})", index),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::AddTodo { label, due_date } => write!(f, "AddTodo({}, {})", label, due_date),
            Action::SearchTodos(label) => write!(f, "SearchTodos({})", label),
            Action::UpdateTodo {
                id,
                label,
                due_date,
            } => write!(f, "UpdateTodo({}, {}, {})", id, label, due_date),
            Action::DeleteTodo(id) => write!(f, "DeleteTodo({})", id),
        }
    }
}
