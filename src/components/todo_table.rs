//! Todo table - the list view
//!
//! Shows every stored todo in three columns (Id, Todo, Date). The rows are
//! replaced wholesale on every reload. Search marks matching label cells
//! without touching the rows themselves.

use crate::action::Action;
use crate::component::Component;
use crate::model::TodoItem;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use std::collections::BTreeSet;

/// Column headers in display order
pub const HEADERS: [&str; 3] = ["Id", "Todo", "Date"];

/// Index of the label column
pub const LABEL_COLUMN: usize = 1;

/// List view over all todos
pub struct TodoTable {
    rows: Vec<TodoItem>,
    state: TableState,
    /// Cells marked by the last search, as (row, column)
    highlighted: BTreeSet<(usize, usize)>,
    /// Area of the last draw, used to map mouse clicks to rows
    area: Rect,
}

impl Default for TodoTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoTable {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            state: TableState::default(),
            highlighted: BTreeSet::new(),
            area: Rect::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Contents
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace all rows with a fresh storage listing.
    ///
    /// Search highlights are dropped and the selection is clamped to the new
    /// row count.
    pub fn reload(&mut self, rows: Vec<TodoItem>) {
        self.rows = rows;
        self.highlighted.clear();

        let selected = self
            .state
            .selected()
            .filter(|_| !self.rows.is_empty())
            .map(|idx| idx.min(self.rows.len() - 1));
        self.state.select(selected);
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[TodoItem] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Visible cell texts, row by row
    pub fn visible_cells(&self) -> Vec<[String; 3]> {
        self.rows.iter().map(TodoItem::cells).collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    /// The todo in the selected row, if any
    pub fn selected_todo(&self) -> Option<&TodoItem> {
        self.selected_index().and_then(|idx| self.rows.get(idx))
    }

    /// Select a row; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.rows.len() {
            self.state.select(Some(index));
        }
    }

    pub fn next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let next = match self.state.selected() {
            Some(idx) if idx + 1 < self.rows.len() => idx + 1,
            Some(_) => 0,
            None => 0,
        };
        self.state.select(Some(next));
    }

    pub fn previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let prev = match self.state.selected() {
            Some(0) | None => self.rows.len() - 1,
            Some(idx) => idx - 1,
        };
        self.state.select(Some(prev));
    }

    pub fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.state.select(Some(self.rows.len() - 1));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search Highlights
    // ─────────────────────────────────────────────────────────────────────────

    /// Mark the label cell of every loaded row whose label equals `label`.
    ///
    /// Earlier marks are cleared first. Returns the number of marked cells.
    pub fn highlight_matches(&mut self, label: &str) -> usize {
        self.highlighted = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, todo)| todo.label == label)
            .map(|(row, _)| (row, LABEL_COLUMN))
            .collect();
        self.highlighted.len()
    }

    pub fn is_highlighted(&self, row: usize, column: usize) -> bool {
        self.highlighted.contains(&(row, column))
    }

    pub fn highlighted_cells(&self) -> Vec<(usize, usize)> {
        self.highlighted.iter().copied().collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mouse
    // ─────────────────────────────────────────────────────────────────────────

    /// Row index under a terminal position, based on the last draw
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.area.inner(ratatui::layout::Margin {
            vertical: 1,
            horizontal: 1,
        });
        // first inner line is the header
        let first_data_line = inner.y + 1;
        if column < inner.x
            || column >= inner.x + inner.width
            || row < first_data_line
            || row >= inner.y + inner.height
        {
            return None;
        }

        let index = self.state.offset() + (row - first_data_line) as usize;
        (index < self.rows.len()).then_some(index)
    }
}

impl Component for TodoTable {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevRow),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstRow),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastRow),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.row_at(mouse.column, mouse.row).map(Action::SelectRow)
            }
            MouseEventKind::ScrollDown => Some(Action::NextRow),
            MouseEventKind::ScrollUp => Some(Action::PrevRow),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextRow => self.next(),
            Action::PrevRow => self.previous(),
            Action::FirstRow => self.select_first(),
            Action::LastRow => self.select_last(),
            Action::SelectRow(index) => self.select(index),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.area = area;

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" ToDos ({}) ", self.rows.len()))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::DarkGray));

        if self.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No todos yet",
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(Span::styled(
                    "Press 'a' to add one",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(ratatui::layout::Alignment::Center)
            .block(block);
            frame.render_widget(empty, area);
            return Ok(());
        }

        let header = Row::new(HEADERS.iter().map(|h| {
            Cell::from(*h).style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        }))
        .bottom_margin(0);

        let rows: Vec<Row> = self
            .visible_cells()
            .into_iter()
            .enumerate()
            .map(|(row_idx, cells)| {
                let cells = cells.into_iter().enumerate().map(|(col_idx, text)| {
                    let style = if self.is_highlighted(row_idx, col_idx) {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Yellow)
                            .add_modifier(Modifier::BOLD)
                    } else if col_idx == 0 {
                        Style::default().fg(Color::DarkGray)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    Cell::from(text).style(style)
                });
                Row::new(cells)
            })
            .collect();

        let widths = [
            Constraint::Length(6),
            Constraint::Min(20),
            Constraint::Length(12),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(table, area, &mut self.state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn todo(id: i64, label: &str) -> TodoItem {
        TodoItem {
            id,
            label: label.to_string(),
            due_date: "2024-01-01".to_string(),
        }
    }

    fn sample() -> Vec<TodoItem> {
        vec![
            todo(1, "Buy milk"),
            todo(2, "Walk dog"),
            todo(3, "Buy milk"),
            todo(4, "buy milk"),
        ]
    }

    #[test]
    fn test_starts_without_selection() {
        let mut table = TodoTable::new();
        table.reload(sample());
        assert!(table.selected_todo().is_none());
    }

    #[test]
    fn test_highlight_exact_matches_only() {
        let mut table = TodoTable::new();
        table.reload(sample());

        let count = table.highlight_matches("Buy milk");

        assert_eq!(count, 2);
        assert_eq!(table.highlighted_cells(), vec![(0, LABEL_COLUMN), (2, LABEL_COLUMN)]);
        assert!(!table.is_highlighted(3, LABEL_COLUMN));
    }

    #[test]
    fn test_highlight_no_match_selects_nothing() {
        let mut table = TodoTable::new();
        table.reload(sample());
        table.highlight_matches("Buy milk");

        let count = table.highlight_matches("Feed cat");

        assert_eq!(count, 0);
        assert!(table.highlighted_cells().is_empty());
    }

    #[test]
    fn test_highlight_does_not_reorder_or_select() {
        let mut table = TodoTable::new();
        table.reload(sample());
        let before = table.visible_cells();

        table.highlight_matches("Walk dog");

        assert_eq!(table.visible_cells(), before);
        assert!(table.selected_index().is_none());
    }

    #[test]
    fn test_reload_is_idempotent_and_clears_highlights() {
        let mut table = TodoTable::new();
        table.reload(sample());
        table.highlight_matches("Buy milk");
        let first = table.visible_cells();

        table.reload(sample());
        assert_eq!(table.visible_cells(), first);
        assert!(table.highlighted_cells().is_empty());
    }

    #[test]
    fn test_reload_clamps_selection() {
        let mut table = TodoTable::new();
        table.reload(sample());
        table.select_last();

        table.reload(vec![todo(1, "Buy milk"), todo(2, "Walk dog")]);
        assert_eq!(table.selected_index(), Some(1));

        table.reload(Vec::new());
        assert_eq!(table.selected_index(), None);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut table = TodoTable::new();
        table.reload(sample());

        table.next();
        assert_eq!(table.selected_index(), Some(0));
        table.previous();
        assert_eq!(table.selected_index(), Some(3));
        table.next();
        assert_eq!(table.selected_index(), Some(0));
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut table = TodoTable::new();
        table.reload(sample());
        table.select(10);
        assert!(table.selected_index().is_none());
    }

    #[test]
    fn test_key_events_map_to_actions() {
        let mut table = TodoTable::new();
        let down = table
            .handle_key_event(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE))
            .unwrap();
        let last = table
            .handle_key_event(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT))
            .unwrap();
        assert_eq!(down, Some(Action::NextRow));
        assert_eq!(last, Some(Action::LastRow));
    }

    #[test]
    fn test_row_at_maps_clicks() {
        let mut table = TodoTable::new();
        table.reload(sample());
        table.area = Rect::new(0, 4, 40, 10);

        // border at y=4, header at y=5, first data row at y=6
        assert_eq!(table.row_at(5, 5), None);
        assert_eq!(table.row_at(5, 6), Some(0));
        assert_eq!(table.row_at(5, 9), Some(3));
        assert_eq!(table.row_at(5, 10), None);
        assert_eq!(table.row_at(0, 6), None);
    }
}
