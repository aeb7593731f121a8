//! Todo item records as stored in the `todos` table

use chrono::NaiveDate;

/// ISO date format used for the `Date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A persisted todo item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    /// Storage-assigned identifier, never reused
    pub id: i64,
    /// Free-text description, may be empty
    pub label: String,
    /// Due date as ISO text
    pub due_date: String,
}

impl TodoItem {
    /// Parse the stored due date, if it is a valid ISO date
    pub fn parsed_due_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.due_date.trim(), DATE_FORMAT).ok()
    }

    /// Cell texts in column order (Id, Todo, Date)
    pub fn cells(&self) -> [String; 3] {
        [self.id.to_string(), self.label.clone(), self.due_date.clone()]
    }
}

/// Payload for inserting or updating a todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub label: String,
    pub due_date: String,
}

impl NewTodo {
    pub fn new(label: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            label: label.into(),
            due_date: format_date(due_date),
        }
    }
}

/// Render a calendar date the way it is stored
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
