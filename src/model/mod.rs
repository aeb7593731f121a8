//! Model layer
//!
//! - `TodoItem` / `NewTodo` - stored todos and todos about to be stored
//! - `CalendarState` - date picker cursor
//! - `ModalStack` - modal overlay management

pub mod calendar;
pub mod modal;
pub mod todo;

pub use calendar::CalendarState;
pub use modal::{Menu, Modal, ModalStack};
pub use todo::{NewTodo, TodoItem};
