//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that routes input to the table, the shell and the open dialog. Dialogs only
//! emit Actions; the App owns the repository and performs every storage call.

use crate::action::Action;
use crate::component::Component;
use crate::components::menu_bar::{entry_action, handle_menu_key};
use crate::components::message_box::{DELETE_SUCCESS_MESSAGE, DELETE_SUCCESS_TITLE};
use crate::components::{
    calculate_shell_layout, ConfirmDialog, HelpDialog, MessageBox, SearchDialog, Shell,
    StatusInfo, TodoFormDialog, TodoTable,
};
use crate::model::{Menu, Modal, ModalStack, NewTodo};
use crate::services::{StorageError, TodoRepository};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};

pub const SELECT_TO_EDIT: &str = "Select a todo to edit first";
pub const SELECT_TO_DELETE: &str = "Select a todo to delete first";

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Todo storage
    repository: Box<dyn TodoRepository>,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub table: TodoTable,
    pub shell: Shell,
    pub form: TodoFormDialog,
    pub search_dialog: SearchDialog,
    pub delete_dialog: ConfirmDialog,
    pub quit_dialog: ConfirmDialog,
    pub about_dialog: MessageBox,
    pub notice: MessageBox,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App on top of `repository`. Rows are loaded by `init`.
    pub fn new(repository: Box<dyn TodoRepository>) -> App {
        App {
            repository,
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            status_message: None,
            table: TodoTable::new(),
            shell: Shell::new(),
            form: TodoFormDialog::new(),
            search_dialog: SearchDialog::new(),
            delete_dialog: ConfirmDialog::delete(),
            quit_dialog: ConfirmDialog::quit(),
            about_dialog: MessageBox::about(),
            notice: MessageBox::default(),
            help_dialog: HelpDialog::default(),
        }
    }

    /// Replace the table rows with the full storage listing
    pub fn reload(&mut self) -> bool {
        match self.repository.list_all() {
            Ok(rows) => {
                tracing::debug!(rows = rows.len(), "reloaded todos");
                self.table.reload(rows);
                true
            }
            Err(e) => {
                self.report_error("Failed to load todos", &e);
                false
            }
        }
    }

    fn report_error(&mut self, context: &str, err: &StorageError) {
        tracing::error!(error = %err, "{}", context);
        self.error = Some(format!("{}: {}", context, err));
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.error = None;
        self.status_message = Some(message.into());
    }

    /// Drop an open drop-down before another dialog opens over it
    fn dismiss_menu(&mut self) {
        if matches!(self.modals.top(), Some(Modal::Menu { .. })) {
            self.modals.pop();
        }
    }

    /// Show a dialog. A message left by an earlier attempt no longer applies.
    fn open_dialog(&mut self, modal: Modal) {
        self.error = None;
        self.modals.push(modal);
    }

    fn open_menu(&mut self, index: usize) {
        let Some(menu) = Menu::from_index(index) else {
            return;
        };
        let open = match self.modals.top() {
            Some(Modal::Menu { menu, .. }) => Some(*menu),
            _ => None,
        };
        match open {
            Some(current) if current == menu => {
                self.modals.pop();
            }
            Some(_) => {
                if let Some(Modal::Menu {
                    menu: current,
                    selected_index,
                }) = self.modals.top_mut()
                {
                    *current = menu;
                    *selected_index = 0;
                }
            }
            None => self.modals.push(Modal::Menu {
                menu,
                selected_index: 0,
            }),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Storage operations
    // ─────────────────────────────────────────────────────────────────────────

    fn add_todo(&mut self, label: String, due_date: String) {
        let todo = NewTodo { label, due_date };
        match self.repository.create(&todo) {
            Ok(created) => {
                tracing::info!(id = created.id, label = %created.label, date = %created.due_date, "added todo");
                self.modals.pop();
                if self.reload() {
                    self.set_status(format!("Added ToDo #{}", created.id));
                }
            }
            Err(e) => self.report_error("Failed to add todo", &e),
        }
    }

    fn update_todo(&mut self, id: i64, label: String, due_date: String) {
        let todo = NewTodo { label, due_date };
        match self.repository.update(id, &todo) {
            Ok(rows) => {
                tracing::info!(id, rows, "updated todo");
                self.modals.pop();
                if self.reload() {
                    if rows == 0 {
                        tracing::warn!(id, "updated todo no longer exists");
                        self.set_status(format!("ToDo #{} no longer exists", id));
                    } else {
                        self.set_status(format!("Updated ToDo #{}", id));
                    }
                }
            }
            Err(e) => self.report_error("Failed to update todo", &e),
        }
    }

    fn delete_todo(&mut self, id: i64) {
        match self.repository.delete(id) {
            Ok(rows) => {
                tracing::info!(id, rows, "deleted todo");
                self.reload();
                self.notice.set_notice(DELETE_SUCCESS_TITLE, DELETE_SUCCESS_MESSAGE);
                self.modals.push(Modal::Notice);
            }
            Err(e) => self.report_error("Failed to delete todo", &e),
        }
    }

    fn search_todos(&mut self, label: String) {
        match self.repository.find_by_label(&label) {
            Ok(found) => {
                tracing::debug!(label = %label, found = found.len(), "searched todos");
                let marked = self.table.highlight_matches(&label);
                self.modals.pop();
                if marked == 0 {
                    self.set_status(format!("No ToDo matches \"{}\"", label));
                } else {
                    self.set_status(format!("{} matching ToDo(s) highlighted", marked));
                }
            }
            Err(e) => self.report_error("Failed to search todos", &e),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input routing
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_global_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::ALT) {
            if let KeyCode::Char(c) = key.code {
                let menu = Menu::all().into_iter().find(|m| m.mnemonic() == c);
                return Ok(menu.map(|m| Action::OpenMenu(m.index())));
            }
        }

        let action = match key.code {
            KeyCode::Char('a') => Some(Action::OpenAddDialog),
            KeyCode::Char('/') => Some(Action::OpenSearchDialog),
            KeyCode::Char('e') => Some(Action::OpenEditDialog),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::OpenDeleteDialog),
            KeyCode::Char('i') => Some(Action::OpenAbout),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('r') => Some(Action::Reload),
            KeyCode::F(10) => Some(Action::OpenMenu(0)),
            _ => return self.table.handle_key_event(key),
        };
        Ok(action)
    }

    fn handle_modal_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.modals.top_mut() {
            Some(Modal::Menu {
                menu,
                selected_index,
            }) => Ok(handle_menu_key(menu, selected_index, key)),
            Some(Modal::AddTodo) | Some(Modal::EditTodo { .. }) => self.form.handle_key_event(key),
            Some(Modal::Search) => self.search_dialog.handle_key_event(key),
            Some(Modal::DeleteConfirm { .. }) => self.delete_dialog.handle_key_event(key),
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            Some(Modal::Notice) => self.notice.handle_key_event(key),
            Some(Modal::About) => self.about_dialog.handle_key_event(key),
            Some(Modal::Help) => self.help_dialog.handle_key_event(key),
            None => Ok(None),
        }
    }

    fn confirm_modal(&mut self) -> Option<Action> {
        match self.modals.top().cloned() {
            Some(Modal::Menu {
                menu,
                selected_index,
            }) => {
                self.modals.pop();
                entry_action(menu, selected_index)
            }
            Some(Modal::DeleteConfirm { id }) => {
                self.modals.pop();
                Some(Action::DeleteTodo(id))
            }
            Some(Modal::QuitConfirm) => {
                self.should_quit = true;
                None
            }
            _ => None,
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            // drawn by the shell above the table
            Modal::Menu { .. } => {}
            Modal::AddTodo | Modal::EditTodo { .. } => self.form.draw(frame, area)?,
            Modal::Search => self.search_dialog.draw(frame, area)?,
            Modal::DeleteConfirm { .. } => self.delete_dialog.draw(frame, area)?,
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Notice => self.notice.draw(frame, area)?,
            Modal::About => self.about_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.reload();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        if self.modals.is_empty() {
            self.handle_global_key_event(key)
        } else {
            self.handle_modal_key_event(key)
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match self.modals.top() {
            None => {
                if let Some(action) = self.shell.handle_mouse_event(mouse)? {
                    return Ok(Some(action));
                }
                self.table.handle_mouse_event(mouse)
            }
            Some(Modal::Menu { .. }) => {
                let action = self.shell.handle_mouse_event(mouse)?;
                if action.is_none()
                    && matches!(mouse.kind, crossterm::event::MouseEventKind::Down(_))
                {
                    return Ok(Some(Action::CloseModal));
                }
                Ok(action)
            }
            Some(_) => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Table
            // ─────────────────────────────────────────────────────────────────
            Action::NextRow
            | Action::PrevRow
            | Action::FirstRow
            | Action::LastRow
            | Action::SelectRow(_) => {
                return self.table.update(action);
            }
            Action::Reload => {
                self.dismiss_menu();
                if self.reload() {
                    self.set_status(format!("Loaded {} ToDo(s)", self.table.len()));
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenAddDialog => {
                self.dismiss_menu();
                self.form.open_add();
                self.open_dialog(Modal::AddTodo);
            }
            Action::OpenSearchDialog => {
                self.dismiss_menu();
                self.search_dialog.reset();
                self.open_dialog(Modal::Search);
            }
            Action::OpenEditDialog => {
                self.dismiss_menu();
                match self.table.selected_todo().cloned() {
                    Some(todo) => {
                        self.form.open_edit(&todo);
                        self.open_dialog(Modal::EditTodo { id: todo.id });
                    }
                    None => {
                        tracing::warn!("edit requested without a selected todo");
                        self.error = Some(SELECT_TO_EDIT.to_string());
                    }
                }
            }
            Action::OpenDeleteDialog => {
                self.dismiss_menu();
                match self.table.selected_todo().map(|todo| todo.id) {
                    Some(id) => self.open_dialog(Modal::DeleteConfirm { id }),
                    None => {
                        tracing::warn!("delete requested without a selected todo");
                        self.error = Some(SELECT_TO_DELETE.to_string());
                    }
                }
            }
            Action::OpenAbout => {
                self.dismiss_menu();
                self.modals.push(Modal::About);
            }
            Action::OpenHelp => {
                self.dismiss_menu();
                self.help_dialog.reset();
                self.modals.push(Modal::Help);
            }
            Action::OpenQuitDialog => {
                self.dismiss_menu();
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenMenu(index) => self.open_menu(index),
            Action::CloseModal => {
                self.modals.pop();
                self.error = None;
            }
            Action::ConfirmModal => {
                return Ok(self.confirm_modal());
            }

            // ─────────────────────────────────────────────────────────────────
            // Storage
            // ─────────────────────────────────────────────────────────────────
            Action::AddTodo { label, due_date } => self.add_todo(label, due_date),
            Action::SearchTodos(label) => self.search_todos(label),
            Action::UpdateTodo {
                id,
                label,
                due_date,
            } => self.update_todo(id, label, due_date),
            Action::DeleteTodo(id) => self.delete_todo(id),
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_shell_layout(area);

        let open_menu = match self.modals.top() {
            Some(Modal::Menu {
                menu,
                selected_index,
            }) => Some((*menu, *selected_index)),
            _ => None,
        };
        self.shell.set_open_menu(open_menu);

        self.shell.draw(frame, area)?;
        self.table.draw(frame, layout.table)?;

        let info = StatusInfo {
            total: self.table.len(),
            selected: self.table.selected_todo(),
            highlighted: self.table.highlighted_cells().len(),
            status: self.status_message.as_deref(),
            error: self.error.as_deref(),
        };
        self.shell.draw_status(frame, layout.status, &info);

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        self.shell.draw_dropdown(frame);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TodoItem;
    use crate::services::{DatabaseConnection, SqliteTodoRepository};
    use crossterm::event::{MouseButton, MouseEventKind};
    use tempfile::TempDir;

    fn test_app() -> (App, SqliteTodoRepository, TempDir) {
        let dir = TempDir::new().unwrap();
        let db = DatabaseConnection::new(dir.path().join("database.db"));
        db.ensure_schema().unwrap();
        let repo = SqliteTodoRepository::new(db);
        let mut app = App::new(Box::new(repo.clone()));
        app.init().unwrap();
        (app, repo, dir)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Feed an action and every follow-up through `update`
    fn dispatch(app: &mut App, action: Action) {
        let mut current = Some(action);
        while let Some(a) = current {
            current = app.update(a).unwrap();
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        if let Some(action) = app.handle_key_event(key(code)).unwrap() {
            dispatch(app, action);
        }
    }

    fn add(app: &mut App, label: &str, date: &str) {
        dispatch(app, Action::OpenAddDialog);
        dispatch(
            app,
            Action::AddTodo {
                label: label.to_string(),
                due_date: date.to_string(),
            },
        );
    }

    fn labels(app: &App) -> Vec<String> {
        app.table.rows().iter().map(|t| t.label.clone()).collect()
    }

    #[test]
    fn test_add_inserts_one_row_and_reloads() {
        let (mut app, repo, _dir) = test_app();

        add(&mut app, "Buy milk", "2024-01-01");

        let stored = repo.list_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].label, "Buy milk");
        assert_eq!(stored[0].due_date, "2024-01-01");
        assert_eq!(app.table.rows(), stored.as_slice());
        assert!(app.modals.is_empty());
        assert!(app.error.is_none());
    }

    #[test]
    fn test_add_through_dialog_keys() {
        let (mut app, repo, _dir) = test_app();

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.modals.top(), Some(&Modal::AddTodo));
        for c in "Call mom".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        let stored = repo.list_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].label, "Call mom");
        assert!(stored[0].parsed_due_date().is_some());
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_empty_label_is_inserted() {
        let (mut app, repo, _dir) = test_app();
        add(&mut app, "", "2024-01-01");
        assert_eq!(repo.list_all().unwrap()[0].label, "");
    }

    #[test]
    fn test_global_keys_ignored_while_dialog_open() {
        let (mut app, repo, _dir) = test_app();

        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('a'));

        assert_eq!(app.modals.top(), Some(&Modal::Search));
        assert_eq!(app.search_dialog.query.value(), "qa");
        assert!(repo.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_edit_keeps_id_and_changes_only_label_and_date() {
        let (mut app, repo, _dir) = test_app();
        add(&mut app, "Buy milk", "2024-01-01");
        add(&mut app, "Walk dog", "2024-01-05");
        let id = app.table.rows()[0].id;

        dispatch(&mut app, Action::SelectRow(0));
        dispatch(&mut app, Action::OpenEditDialog);
        assert_eq!(app.modals.top(), Some(&Modal::EditTodo { id }));
        assert_eq!(app.form.label.value(), "Buy milk");

        // a later selection change does not retarget the open dialog
        app.table.select(1);
        app.form.label.set_value("Buy oat milk");
        let submit = app.form.submit();
        dispatch(&mut app, submit);

        let stored = repo.list_all().unwrap();
        assert_eq!(
            stored[0],
            TodoItem {
                id,
                label: "Buy oat milk".to_string(),
                due_date: "2024-01-01".to_string(),
            }
        );
        assert_eq!(stored[1].label, "Walk dog");
        assert_eq!(app.table.rows(), stored.as_slice());
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_edit_without_selection_is_guarded() {
        let (mut app, _repo, _dir) = test_app();
        add(&mut app, "Buy milk", "2024-01-01");

        dispatch(&mut app, Action::OpenEditDialog);

        assert!(app.modals.is_empty());
        assert_eq!(app.error.as_deref(), Some(SELECT_TO_EDIT));
    }

    #[test]
    fn test_guard_message_cleared_once_dialog_opens() {
        let (mut app, _repo, _dir) = test_app();
        add(&mut app, "Buy milk", "2024-01-01");

        dispatch(&mut app, Action::OpenEditDialog);
        assert_eq!(app.error.as_deref(), Some(SELECT_TO_EDIT));

        dispatch(&mut app, Action::SelectRow(0));
        dispatch(&mut app, Action::OpenEditDialog);
        assert!(app.error.is_none());

        dispatch(&mut app, Action::OpenDeleteDialog);
        dispatch(&mut app, Action::CloseModal);
        dispatch(&mut app, Action::CloseModal);
        assert!(app.modals.is_empty());
        assert!(app.error.is_none());
    }

    #[test]
    fn test_cancel_clears_guard_message() {
        let (mut app, _repo, _dir) = test_app();
        add(&mut app, "Buy milk", "2024-01-01");

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.error.as_deref(), Some(SELECT_TO_DELETE));

        dispatch(&mut app, Action::SelectRow(0));
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.table.selected_index(), Some(0));
        assert!(app.modals.is_empty());
        assert!(app.error.is_none());
    }

    #[test]
    fn test_delete_without_selection_is_guarded() {
        let (mut app, _repo, _dir) = test_app();
        add(&mut app, "Buy milk", "2024-01-01");

        press(&mut app, KeyCode::Char('d'));

        assert!(app.modals.is_empty());
        assert_eq!(app.error.as_deref(), Some(SELECT_TO_DELETE));
    }

    #[test]
    fn test_delete_confirm_removes_row_and_shows_notice() {
        let (mut app, repo, _dir) = test_app();
        add(&mut app, "Buy milk", "2024-01-01");
        add(&mut app, "Walk dog", "2024-01-05");
        let id = app.table.rows()[0].id;

        dispatch(&mut app, Action::SelectRow(0));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.modals.top(), Some(&Modal::DeleteConfirm { id }));
        press(&mut app, KeyCode::Char('y'));

        assert_eq!(labels(&app), vec!["Walk dog"]);
        assert_eq!(repo.list_all().unwrap().len(), 1);
        assert_eq!(app.modals.top(), Some(&Modal::Notice));
        assert_eq!(
            app.notice,
            MessageBox::notice(DELETE_SUCCESS_TITLE, DELETE_SUCCESS_MESSAGE)
        );

        press(&mut app, KeyCode::Enter);
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_delete_declined_keeps_row() {
        let (mut app, repo, _dir) = test_app();
        add(&mut app, "Buy milk", "2024-01-01");

        dispatch(&mut app, Action::SelectRow(0));
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));

        assert!(app.modals.is_empty());
        assert_eq!(repo.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_missing_id_still_shows_notice() {
        let (mut app, repo, _dir) = test_app();
        add(&mut app, "Buy milk", "2024-01-01");

        dispatch(&mut app, Action::DeleteTodo(999));

        assert_eq!(repo.list_all().unwrap().len(), 1);
        assert_eq!(app.modals.top(), Some(&Modal::Notice));
        assert!(app.error.is_none());
    }

    #[test]
    fn test_search_highlights_exact_matches() {
        let (mut app, _repo, _dir) = test_app();
        add(&mut app, "Buy milk", "2024-01-01");
        add(&mut app, "Walk dog", "2024-01-02");
        add(&mut app, "Buy milk", "2024-01-03");
        add(&mut app, "buy milk", "2024-01-04");
        let before = app.table.rows().to_vec();

        dispatch(&mut app, Action::OpenSearchDialog);
        dispatch(&mut app, Action::SearchTodos("Buy milk".to_string()));

        assert_eq!(app.table.highlighted_cells(), vec![(0, 1), (2, 1)]);
        assert_eq!(app.table.rows(), before.as_slice());
        assert_eq!(app.table.selected_index(), None);
        assert!(app.modals.is_empty());

        // a second search replaces the first
        dispatch(&mut app, Action::OpenSearchDialog);
        dispatch(&mut app, Action::SearchTodos("Walk dog".to_string()));
        assert_eq!(app.table.highlighted_cells(), vec![(1, 1)]);
    }

    #[test]
    fn test_search_without_match_reports_no_error() {
        let (mut app, _repo, _dir) = test_app();
        add(&mut app, "Buy milk", "2024-01-01");

        dispatch(&mut app, Action::OpenSearchDialog);
        dispatch(&mut app, Action::SearchTodos("Nothing".to_string()));

        assert!(app.table.highlighted_cells().is_empty());
        assert_eq!(app.table.selected_index(), None);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_list_matches_storage_after_mutations() {
        let (mut app, repo, _dir) = test_app();
        add(&mut app, "a", "2024-01-01");
        add(&mut app, "b", "2024-01-02");
        add(&mut app, "c", "2024-01-03");

        let b = app.table.rows()[1].id;
        dispatch(&mut app, Action::DeleteTodo(b));
        dispatch(&mut app, Action::CloseModal);
        let c = app.table.rows()[1].id;
        dispatch(
            &mut app,
            Action::UpdateTodo {
                id: c,
                label: "c2".to_string(),
                due_date: "2024-02-01".to_string(),
            },
        );
        add(&mut app, "d", "2024-01-04");

        assert_eq!(app.table.rows(), repo.list_all().unwrap().as_slice());
        assert_eq!(labels(&app), vec!["a", "c2", "d"]);
    }

    #[test]
    fn test_reload_twice_is_idempotent() {
        let (mut app, _repo, _dir) = test_app();
        add(&mut app, "a", "2024-01-01");

        press(&mut app, KeyCode::Char('r'));
        let first = app.table.rows().to_vec();
        press(&mut app, KeyCode::Char('r'));

        assert_eq!(app.table.rows(), first.as_slice());
    }

    #[test]
    fn test_storage_failure_keeps_dialog_open() {
        let dir = TempDir::new().unwrap();
        // no schema: every statement fails
        let repo = SqliteTodoRepository::new(DatabaseConnection::new(dir.path().join("db.db")));
        let mut app = App::new(Box::new(repo));
        app.init().unwrap();
        assert!(app.error.is_some());

        dispatch(&mut app, Action::OpenAddDialog);
        dispatch(
            &mut app,
            Action::AddTodo {
                label: "Buy milk".to_string(),
                due_date: "2024-01-01".to_string(),
            },
        );

        assert_eq!(app.modals.top(), Some(&Modal::AddTodo));
        assert!(app
            .error
            .as_deref()
            .is_some_and(|e| e.starts_with("Failed to add todo")));
    }

    #[test]
    fn test_menu_navigation_activates_entry() {
        let (mut app, _repo, _dir) = test_app();

        press(&mut app, KeyCode::F(10));
        assert_eq!(
            app.modals.top(),
            Some(&Modal::Menu {
                menu: Menu::File,
                selected_index: 0
            })
        );

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        // Edit > Search
        assert_eq!(app.modals.top(), Some(&Modal::Search));
        assert_eq!(app.modals.len(), 1);
    }

    #[test]
    fn test_alt_mnemonic_and_toggle() {
        let (mut app, _repo, _dir) = test_app();

        let alt_h = KeyEvent::new(KeyCode::Char('h'), KeyModifiers::ALT);
        let action = app.handle_key_event(alt_h).unwrap();
        assert_eq!(action, Some(Action::OpenMenu(2)));

        dispatch(&mut app, Action::OpenMenu(2));
        dispatch(&mut app, Action::OpenMenu(0));
        assert_eq!(
            app.modals.top(),
            Some(&Modal::Menu {
                menu: Menu::File,
                selected_index: 0
            })
        );

        dispatch(&mut app, Action::OpenMenu(0));
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_quit_flow() {
        let (mut app, _repo, _dir) = test_app();

        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        press(&mut app, KeyCode::Esc);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_dialog() {
        let (mut app, _repo, _dir) = test_app();
        dispatch(&mut app, Action::OpenAddDialog);

        let action = app
            .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(action, Some(Action::ForceQuit));
    }

    #[test]
    fn test_click_outside_menu_closes_it() {
        let (mut app, _repo, _dir) = test_app();
        dispatch(&mut app, Action::OpenMenu(1));

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 70,
            row: 20,
            modifiers: KeyModifiers::NONE,
        };
        let action = app.handle_mouse_event(click).unwrap();
        assert_eq!(action, Some(Action::CloseModal));
    }

    #[test]
    fn test_storage_error_message_format() {
        let err = StorageError::Query(rusqlite::Error::QueryReturnedNoRows);
        let (mut app, _repo, _dir) = test_app();
        app.report_error("Failed to load todos", &err);
        assert!(app
            .error
            .as_deref()
            .is_some_and(|e| e.starts_with("Failed to load todos: database query failed")));
    }
}
