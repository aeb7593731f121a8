//! Message boxes: the success notice and the about box

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub const DELETE_SUCCESS_TITLE: &str = "Success";
pub const DELETE_SUCCESS_MESSAGE: &str = "The record was deleted successfully!";

const ABOUT_TEXT: [&str; 2] = [
    "This ToDo App was created to help you organise your ToDos.",
    "You can select a date until you want to finish your ToDo.",
];

/// Static text box closed with Enter or Esc
#[derive(Debug, Clone, PartialEq)]
pub struct MessageBox {
    title: String,
    lines: Vec<String>,
    accent: Color,
}

impl Default for MessageBox {
    fn default() -> Self {
        Self::notice(DELETE_SUCCESS_TITLE, DELETE_SUCCESS_MESSAGE)
    }
}

impl MessageBox {
    pub fn notice(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: vec![message.into()],
            accent: Color::Green,
        }
    }

    pub fn about() -> Self {
        Self {
            title: "About".to_string(),
            lines: ABOUT_TEXT.iter().map(|l| l.to_string()).collect(),
            accent: Color::Cyan,
        }
    }

    pub fn set_notice(&mut self, title: &str, message: &str) {
        *self = Self::notice(title, message);
    }
}

impl Component for MessageBox {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char(' ') => {
                Some(Action::CloseModal)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let width = 64;
        let height = self.lines.len() as u16 + 6;
        let popup_area = centered_popup(area, width, height);
        frame.render_widget(Clear, popup_area);

        let mut content = vec![Line::from("")];
        content.extend(self.lines.iter().map(|l| Line::from(l.clone())));
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw("OK"),
        ]));

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.accent))
                    .title(format!(" {} ", self.title))
                    .title_style(Style::default().fg(self.accent).add_modifier(Modifier::BOLD)),
            )
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_about_text() {
        let about = MessageBox::about();
        assert!(about.lines.join(" ").contains("help you organise your ToDos"));
    }

    #[test]
    fn test_enter_closes() {
        let mut notice = MessageBox::default();
        let action = notice
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::CloseModal));
        assert_eq!(notice.lines, vec![DELETE_SUCCESS_MESSAGE.to_string()]);
    }
}
