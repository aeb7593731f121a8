//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod calendar_picker;
pub mod confirm_dialog;
pub mod help_dialog;
pub mod layout;
pub mod menu_bar;
pub mod message_box;
pub mod search_dialog;
pub mod shell;
pub mod text_input;
pub mod todo_form;
pub mod todo_table;

pub use confirm_dialog::ConfirmDialog;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_shell_layout, centered_popup};
pub use menu_bar::MenuBar;
pub use message_box::MessageBox;
pub use search_dialog::SearchDialog;
pub use shell::{Shell, StatusInfo};
pub use text_input::TextInput;
pub use todo_form::TodoFormDialog;
pub use todo_table::TodoTable;
