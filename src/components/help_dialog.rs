//! Help dialog component
//!
//! Lists every keyboard shortcut of the todo window.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Scrollable list of shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl HelpDialog {
    pub fn reset(&mut self) {
        self.scroll_offset = 0;
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
                Some(Action::CloseModal)
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let dialog_area = centered_popup(area, 64, area.height.saturating_sub(4));
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Helper to add a section header
    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    // Helper to add a shortcut line
    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:12}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Table");
    add_shortcut(&mut lines, "j / ↓", "Select next todo");
    add_shortcut(&mut lines, "k / ↑", "Select previous todo");
    add_shortcut(&mut lines, "g / Home", "Select first todo");
    add_shortcut(&mut lines, "G / End", "Select last todo");
    add_shortcut(&mut lines, "Click", "Select a row / press a toolbar button");
    add_shortcut(&mut lines, "r", "Reload from the database");

    add_section(&mut lines, "ToDos");
    add_shortcut(&mut lines, "a", "Add ToDo");
    add_shortcut(&mut lines, "/", "Search by label");
    add_shortcut(&mut lines, "e", "Edit selected ToDo");
    add_shortcut(&mut lines, "d / Del", "Delete selected ToDo");

    add_section(&mut lines, "Add / Update Dialog");
    add_shortcut(&mut lines, "Tab", "Switch between label and calendar");
    add_shortcut(&mut lines, "← → ↑ ↓", "Move the calendar by day / week");
    add_shortcut(&mut lines, "PgUp/PgDn", "Previous / next month");
    add_shortcut(&mut lines, "t", "Jump to today (calendar)");
    add_shortcut(&mut lines, "Ctrl+u", "Clear the label");
    add_shortcut(&mut lines, "Enter", "Save");
    add_shortcut(&mut lines, "Esc", "Cancel");

    add_section(&mut lines, "Menus");
    add_shortcut(&mut lines, "F10", "Open the menu bar");
    add_shortcut(&mut lines, "Alt+f/e/h", "Open File / Edit / Help");
    add_shortcut(&mut lines, "← →", "Switch menu");

    add_section(&mut lines, "Application");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "i", "About");
    add_shortcut(&mut lines, "q", "Quit");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    // Footer
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_help_lists_todo_shortcuts() {
        let text: Vec<String> = build_help_content().iter().map(plain).collect();
        for expected in ["Add ToDo", "Search by label", "Edit selected ToDo", "Delete selected ToDo"] {
            assert!(
                text.iter().any(|l| l.contains(expected)),
                "missing {}",
                expected
            );
        }
    }
}
