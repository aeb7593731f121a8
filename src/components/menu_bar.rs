//! Menu bar with File, Edit and Help drop-downs
//!
//! The bar itself is always visible. An open drop-down is a `Modal::Menu`
//! whose menu and cursor live on the modal stack.

use crate::action::Action;
use crate::model::modal::Menu;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const DROPDOWN_WIDTH: u16 = 28;

/// One entry of a drop-down
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub shortcut: &'static str,
    pub action: Action,
}

impl MenuEntry {
    fn new(label: &'static str, shortcut: &'static str, action: Action) -> Self {
        Self {
            label,
            shortcut,
            action,
        }
    }
}

/// Entries of `menu` in display order
pub fn menu_entries(menu: Menu) -> Vec<MenuEntry> {
    match menu {
        Menu::File => vec![
            MenuEntry::new("Add ToDo", "a", Action::OpenAddDialog),
            MenuEntry::new("Reload", "r", Action::Reload),
            MenuEntry::new("Quit", "q", Action::OpenQuitDialog),
        ],
        Menu::Edit => vec![
            MenuEntry::new("Search", "/", Action::OpenSearchDialog),
            MenuEntry::new("Edit ToDo", "e", Action::OpenEditDialog),
            MenuEntry::new("Delete ToDo", "d", Action::OpenDeleteDialog),
        ],
        Menu::Help => vec![
            MenuEntry::new("Keyboard Shortcuts", "?", Action::OpenHelp),
            MenuEntry::new("About", "i", Action::OpenAbout),
        ],
    }
}

/// Action of the entry at `index`, if any
pub fn entry_action(menu: Menu, index: usize) -> Option<Action> {
    menu_entries(menu).into_iter().nth(index).map(|e| e.action)
}

/// Move the drop-down cursor or switch menus.
///
/// Enter confirms the entry under the cursor, Esc closes the drop-down.
pub fn handle_menu_key(menu: &mut Menu, selected: &mut usize, key: KeyEvent) -> Option<Action> {
    let count = menu_entries(*menu).len();
    match key.code {
        KeyCode::Esc | KeyCode::F(10) => Some(Action::CloseModal),
        KeyCode::Enter => Some(Action::ConfirmModal),
        KeyCode::Left | KeyCode::Char('h') => {
            *menu = menu.prev();
            *selected = 0;
            None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            *menu = menu.next();
            *selected = 0;
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            *selected = (*selected + 1) % count;
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            *selected = if *selected == 0 { count - 1 } else { *selected - 1 };
            None
        }
        _ => None,
    }
}

/// Where each menu title sits on the bar
pub fn title_areas(area: Rect) -> Vec<(Menu, Rect)> {
    let mut x = area.x + 1;
    let mut areas = Vec::new();
    for menu in Menu::all() {
        let width = menu.title().len() as u16 + 2;
        areas.push((menu, Rect::new(x, area.y, width, 1)));
        x += width + 1;
    }
    areas
}

/// Menu bar renderer and hit testing
#[derive(Default)]
pub struct MenuBar {
    titles: Vec<(Menu, Rect)>,
    dropdown: Option<Rect>,
}

impl MenuBar {
    /// Menu whose title is under a terminal position
    pub fn menu_at(&self, column: u16, row: u16) -> Option<Menu> {
        self.titles
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(menu, _)| *menu)
    }

    /// Entry index of the open drop-down under a terminal position
    pub fn entry_at(&self, column: u16, row: u16) -> Option<usize> {
        let rect = self.dropdown?;
        if !contains(rect, column, row) || row == rect.y || row + 1 >= rect.y + rect.height {
            return None;
        }
        Some((row - rect.y - 1) as usize)
    }

    /// Forget the drop-down area once it is closed
    pub fn close_dropdown(&mut self) {
        self.dropdown = None;
    }

    pub fn draw_bar(&mut self, frame: &mut Frame, area: Rect, open: Option<Menu>) {
        self.titles = title_areas(area);

        let mut spans = vec![Span::raw(" ")];
        for (menu, _) in &self.titles {
            let style = if open == Some(*menu) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(format!(" {} ", menu.title()), style));
            spans.push(Span::raw(" "));
        }

        let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(bar, area);
    }

    pub fn draw_dropdown(&mut self, frame: &mut Frame, menu: Menu, selected: usize) {
        let entries = menu_entries(menu);
        let anchor = self
            .titles
            .iter()
            .find(|(m, _)| *m == menu)
            .map(|(_, rect)| *rect)
            .unwrap_or_default();

        let rect = Rect::new(
            anchor.x,
            anchor.y + 1,
            DROPDOWN_WIDTH,
            entries.len() as u16 + 2,
        )
        .intersection(frame.area());
        self.dropdown = Some(rect);

        frame.render_widget(Clear, rect);

        let inner_width = DROPDOWN_WIDTH.saturating_sub(2) as usize;
        let lines: Vec<Line> = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let gap = inner_width.saturating_sub(entry.label.len() + entry.shortcut.len() + 2);
                let text = format!(" {}{}{} ", entry.label, " ".repeat(gap), entry.shortcut);
                let style = if idx == selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(Span::styled(text, style))
            })
            .collect();

        let dropdown = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(dropdown, rect);
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_entries_cover_todo_operations() {
        let actions: Vec<Action> = Menu::all()
            .into_iter()
            .flat_map(menu_entries)
            .map(|e| e.action)
            .collect();

        for expected in [
            Action::OpenAddDialog,
            Action::OpenSearchDialog,
            Action::OpenEditDialog,
            Action::OpenDeleteDialog,
            Action::OpenAbout,
            Action::OpenQuitDialog,
        ] {
            assert!(actions.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_menu_keys() {
        let mut menu = Menu::File;
        let mut selected = 0;

        assert_eq!(handle_menu_key(&mut menu, &mut selected, key(KeyCode::Up)), None);
        assert_eq!(selected, menu_entries(Menu::File).len() - 1);

        handle_menu_key(&mut menu, &mut selected, key(KeyCode::Right));
        assert_eq!(menu, Menu::Edit);
        assert_eq!(selected, 0);

        handle_menu_key(&mut menu, &mut selected, key(KeyCode::Down));
        assert_eq!(entry_action(menu, selected), Some(Action::OpenEditDialog));

        assert_eq!(
            handle_menu_key(&mut menu, &mut selected, key(KeyCode::Enter)),
            Some(Action::ConfirmModal)
        );
        assert_eq!(
            handle_menu_key(&mut menu, &mut selected, key(KeyCode::Esc)),
            Some(Action::CloseModal)
        );
    }

    #[test]
    fn test_entry_action_out_of_range() {
        assert_eq!(entry_action(Menu::Help, 9), None);
    }

    #[test]
    fn test_title_areas_hit_testing() {
        let mut bar = MenuBar::default();
        bar.titles = title_areas(Rect::new(0, 0, 80, 1));

        // " File " starts at column 1
        assert_eq!(bar.menu_at(1, 0), Some(Menu::File));
        assert_eq!(bar.menu_at(8, 0), Some(Menu::Edit));
        assert_eq!(bar.menu_at(0, 0), None);
        assert_eq!(bar.menu_at(1, 1), None);
    }

    #[test]
    fn test_entry_at_skips_borders() {
        let mut bar = MenuBar::default();
        bar.dropdown = Some(Rect::new(1, 1, DROPDOWN_WIDTH, 5));

        assert_eq!(bar.entry_at(2, 1), None);
        assert_eq!(bar.entry_at(2, 2), Some(0));
        assert_eq!(bar.entry_at(2, 4), Some(2));
        assert_eq!(bar.entry_at(2, 5), None);
    }
}
