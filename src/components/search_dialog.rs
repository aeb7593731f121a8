//! Search dialog component
//!
//! Collects a label; matching rows are highlighted in the table.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::components::TextInput;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Search by exact label
pub struct SearchDialog {
    pub query: TextInput,
}

impl Default for SearchDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchDialog {
    pub fn new() -> Self {
        Self {
            query: TextInput::new("Search ToDo"),
        }
    }

    pub fn reset(&mut self) {
        self.query.clear();
    }
}

impl Component for SearchDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::SearchTodos(self.query.value().to_string())),
            _ => {
                self.query.handle_key(key);
                None
            }
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 44, 8);
        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            self.query.render_line(popup_area.width.saturating_sub(4), true),
            Line::from(""),
            Line::from(Span::styled(
                "Matches the whole label, case-sensitive",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(vec![
                Span::styled(" Enter ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw("Search  "),
                Span::styled(" Esc ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::raw("Cancel"),
            ]),
        ];

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Search ToDo ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        );

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
