//! Modal stack for dialogs layered over the todo table
//!
//! Only the top modal receives input. Dialog-specific state lives in the
//! dialog components; the modal carries what was captured when it opened.

/// Top-level menus of the menu bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    File,
    Edit,
    Help,
}

impl Menu {
    pub fn all() -> [Menu; 3] {
        [Menu::File, Menu::Edit, Menu::Help]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Menu::File => "File",
            Menu::Edit => "Edit",
            Menu::Help => "Help",
        }
    }

    pub fn from_index(index: usize) -> Option<Menu> {
        Self::all().get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            Menu::File => 0,
            Menu::Edit => 1,
            Menu::Help => 2,
        }
    }

    /// Mnemonic used with Alt
    pub fn mnemonic(&self) -> char {
        match self {
            Menu::File => 'f',
            Menu::Edit => 'e',
            Menu::Help => 'h',
        }
    }

    pub fn next(&self) -> Menu {
        match self {
            Menu::File => Menu::Edit,
            Menu::Edit => Menu::Help,
            Menu::Help => Menu::File,
        }
    }

    pub fn prev(&self) -> Menu {
        match self {
            Menu::File => Menu::Help,
            Menu::Edit => Menu::File,
            Menu::Help => Menu::Edit,
        }
    }
}

/// A dialog or overlay displayed on top of the table
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Drop-down of a menu bar entry
    Menu { menu: Menu, selected_index: usize },
    /// Add todo form
    AddTodo,
    /// Search by label
    Search,
    /// Edit form for the row captured at open time
    EditTodo { id: i64 },
    /// Delete confirmation for the row captured at open time
    DeleteConfirm { id: i64 },
    /// Informational message box
    Notice,
    /// About box
    About,
    /// Keyboard shortcuts
    Help,
    /// Quit confirmation
    QuitConfirm,
}

/// A stack of modal overlays
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
