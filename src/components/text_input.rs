//! Single-line text field used by the dialogs

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Editable text with a placeholder
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    placeholder: String,
}

impl TextInput {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            placeholder: placeholder.into(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Apply an editing key. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.clear();
                true
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => false,
            KeyCode::Char(c) => {
                self.value.push(c);
                true
            }
            KeyCode::Backspace => {
                self.value.pop();
                true
            }
            _ => false,
        }
    }

    /// Render as `> text_`, keeping the end of the text visible within `width` columns
    pub fn render_line(&self, width: u16, focused: bool) -> Line<'static> {
        let prompt = Span::styled(
            "> ",
            Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }),
        );

        if self.value.is_empty() && !focused {
            return Line::from(vec![
                prompt,
                Span::styled(self.placeholder.clone(), Style::default().fg(Color::DarkGray)),
            ]);
        }

        // prompt + cursor take three columns
        let budget = (width as usize).saturating_sub(3);
        let cursor = if focused { "_" } else { "" };
        let text_style = if focused {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        Line::from(vec![
            prompt,
            Span::styled(format!("{}{}", tail_to_width(&self.value, budget), cursor), text_style),
        ])
    }
}

/// Longest suffix of `text` that fits in `width` columns
fn tail_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    text[start..].to_string()
}
