//! Yes/No confirmation dialog
//!
//! Used for deleting a todo and for quitting. The App decides what a
//! confirmation does based on the modal on top of the stack.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Confirmation prompt with Yes/No
pub struct ConfirmDialog {
    title: String,
    question: String,
    accent: Color,
}

impl ConfirmDialog {
    pub fn new(title: impl Into<String>, question: impl Into<String>, accent: Color) -> Self {
        Self {
            title: title.into(),
            question: question.into(),
            accent,
        }
    }

    pub fn delete() -> Self {
        Self::new("Delete ToDo", "Are you sure you want to delete?", Color::Red)
    }

    pub fn quit() -> Self {
        Self::new("Quit?", "Are you sure you want to quit?", Color::Yellow)
    }
}

impl Component for ConfirmDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::ConfirmModal),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 40, 7);

        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.question.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(" y ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw("Yes  "),
                Span::styled(" n/Esc ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw("No"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.accent))
                    .title(format!(" {} ", self.title))
                    .title_style(Style::default().fg(self.accent).add_modifier(Modifier::BOLD)),
            )
            .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
