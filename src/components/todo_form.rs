//! Add / edit form dialog
//!
//! A label field above a calendar picker. In edit mode the todo id is
//! captured when the dialog opens and submitted unchanged.

use crate::action::Action;
use crate::component::Component;
use crate::components::calendar_picker::{handle_calendar_key, render_calendar, CALENDAR_HEIGHT};
use crate::components::centered_popup;
use crate::components::TextInput;
use crate::model::{CalendarState, NewTodo, TodoItem};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// What submitting the form does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit { id: i64 },
}

impl FormMode {
    fn title(&self) -> &'static str {
        match self {
            FormMode::Add => " Add ToDo ",
            FormMode::Edit { .. } => " Update ToDo ",
        }
    }

    fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Add => "Add ToDo",
            FormMode::Edit { .. } => "Update ToDo",
        }
    }
}

/// Field with keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Label,
    Calendar,
}

/// Form dialog shared by add and edit
pub struct TodoFormDialog {
    pub mode: FormMode,
    pub label: TextInput,
    pub calendar: CalendarState,
    pub focus: FormFocus,
}

impl Default for TodoFormDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoFormDialog {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Add,
            label: TextInput::new("Add ToDo"),
            calendar: CalendarState::today(),
            focus: FormFocus::Label,
        }
    }

    /// Reset for a new todo: empty label, today's date
    pub fn open_add(&mut self) {
        *self = Self::new();
    }

    /// Pre-fill from `todo` and capture its id
    pub fn open_edit(&mut self, todo: &TodoItem) {
        self.mode = FormMode::Edit { id: todo.id };
        self.label = TextInput::new("Add ToDo").with_value(todo.label.clone());
        self.calendar = todo
            .parsed_due_date()
            .map(CalendarState::new)
            .unwrap_or_else(CalendarState::today);
        self.focus = FormFocus::Label;
    }

    /// Action carrying the current field values
    pub fn submit(&self) -> Action {
        let NewTodo { label, due_date } = NewTodo::new(self.label.value(), self.calendar.selected());
        match self.mode {
            FormMode::Add => Action::AddTodo { label, due_date },
            FormMode::Edit { id } => Action::UpdateTodo {
                id,
                label,
                due_date,
            },
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormFocus::Label => FormFocus::Calendar,
            FormFocus::Calendar => FormFocus::Label,
        };
    }
}

impl Component for TodoFormDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Esc => return Ok(Some(Action::CloseModal)),
            KeyCode::Enter => return Ok(Some(self.submit())),
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus();
                return Ok(None);
            }
            _ => {}
        }

        match self.focus {
            FormFocus::Label => {
                self.label.handle_key(key);
            }
            FormFocus::Calendar => {
                handle_calendar_key(&mut self.calendar, key);
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 44, CALENDAR_HEIGHT + 11);
        frame.render_widget(Clear, popup_area);

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(self.mode.title())
            .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));
        let inner = outer.inner(popup_area);
        frame.render_widget(outer, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(CALENDAR_HEIGHT + 2),
                Constraint::Min(1),
            ])
            .split(inner);

        let label_focused = self.focus == FormFocus::Label;
        let field_border = |focused: bool| {
            Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray })
        };

        let label = Paragraph::new(self.label.render_line(chunks[0].width.saturating_sub(2), label_focused))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" ToDo ")
                    .border_style(field_border(label_focused)),
            );
        frame.render_widget(label, chunks[0]);

        let calendar = Paragraph::new(render_calendar(&self.calendar, !label_focused))
            .alignment(ratatui::layout::Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Date: {} ", self.calendar.selected_text()))
                    .border_style(field_border(!label_focused)),
            );
        frame.render_widget(calendar, chunks[1]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(format!("{}  ", self.mode.submit_label())),
            Span::styled(" Tab ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw("Field  "),
            Span::styled(" Esc ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw("Cancel"),
        ]))
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(help, chunks[2]);

        Ok(())
    }
}
