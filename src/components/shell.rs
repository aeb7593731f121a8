//! Main window chrome around the todo table
//!
//! Draws the menu bar, the toolbar buttons, the status line and the key
//! hints, and turns clicks on any of them into Actions.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::calculate_shell_layout;
use crate::components::menu_bar::entry_action;
use crate::components::MenuBar;
use crate::model::modal::Menu;
use crate::model::TodoItem;
use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Buttons on the toolbar, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    Add,
    Search,
    Edit,
    Delete,
}

impl ToolbarButton {
    pub fn all() -> [ToolbarButton; 4] {
        [
            ToolbarButton::Add,
            ToolbarButton::Search,
            ToolbarButton::Edit,
            ToolbarButton::Delete,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToolbarButton::Add => "Add ToDo",
            ToolbarButton::Search => "Search",
            ToolbarButton::Edit => "Edit",
            ToolbarButton::Delete => "Delete",
        }
    }

    pub fn action(&self) -> Action {
        match self {
            ToolbarButton::Add => Action::OpenAddDialog,
            ToolbarButton::Search => Action::OpenSearchDialog,
            ToolbarButton::Edit => Action::OpenEditDialog,
            ToolbarButton::Delete => Action::OpenDeleteDialog,
        }
    }

    fn accent(&self) -> Color {
        match self {
            ToolbarButton::Add => Color::Green,
            ToolbarButton::Search => Color::Cyan,
            ToolbarButton::Edit => Color::Yellow,
            ToolbarButton::Delete => Color::Red,
        }
    }
}

/// Button rectangles inside the toolbar row
pub fn button_areas(area: Rect) -> Vec<(ToolbarButton, Rect)> {
    let mut x = area.x + 1;
    let mut areas = Vec::new();
    for button in ToolbarButton::all() {
        let width = button.label().len() as u16 + 4;
        if x + width > area.x + area.width {
            break;
        }
        areas.push((button, Rect::new(x, area.y, width, area.height)));
        x += width + 1;
    }
    areas
}

/// What the status line reports
#[derive(Debug, Default)]
pub struct StatusInfo<'a> {
    pub total: usize,
    pub selected: Option<&'a TodoItem>,
    pub highlighted: usize,
    pub status: Option<&'a str>,
    pub error: Option<&'a str>,
}

/// Window chrome: menu bar, toolbar, status line, key hints
#[derive(Default)]
pub struct Shell {
    pub menu_bar: MenuBar,
    buttons: Vec<(ToolbarButton, Rect)>,
    /// Menu whose drop-down is open, mirrored from the modal stack
    open_menu: Option<(Menu, usize)>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track the open drop-down so draw and clicks agree with the modal stack
    pub fn set_open_menu(&mut self, open: Option<(Menu, usize)>) {
        if open.is_none() {
            self.menu_bar.close_dropdown();
        }
        self.open_menu = open;
    }

    pub fn button_at(&self, column: u16, row: u16) -> Option<ToolbarButton> {
        self.buttons
            .iter()
            .find(|(_, r)| {
                column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
            })
            .map(|(button, _)| *button)
    }

    /// Draw the drop-down last so it sits above the table
    pub fn draw_dropdown(&mut self, frame: &mut Frame) {
        if let Some((menu, selected)) = self.open_menu {
            self.menu_bar.draw_dropdown(frame, menu, selected);
        }
    }

    fn draw_toolbar(&mut self, frame: &mut Frame, area: Rect) {
        self.buttons = button_areas(area);

        for (button, rect) in &self.buttons {
            let widget = Paragraph::new(Line::from(Span::styled(
                button.label(),
                Style::default()
                    .fg(button.accent())
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(button.accent())),
            );
            frame.render_widget(widget, *rect);
        }
    }

    fn draw_hints(&self, frame: &mut Frame, area: Rect) {
        let key = |k: &'static str| {
            Span::styled(k, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        };
        let text = |t: &'static str| Span::styled(t, Style::default().fg(Color::DarkGray));

        let hints = Paragraph::new(Line::from(vec![
            key(" a"),
            text(" add  "),
            key("/"),
            text(" search  "),
            key("e"),
            text(" edit  "),
            key("d"),
            text(" delete  "),
            key("r"),
            text(" reload  "),
            key("F10"),
            text(" menu  "),
            key("?"),
            text(" help  "),
            key("q"),
            text(" quit"),
        ]));
        frame.render_widget(hints, area);
    }

    /// Render the status line
    pub fn draw_status(&self, frame: &mut Frame, area: Rect, info: &StatusInfo) {
        let mut spans = vec![Span::styled(
            format!(" {} todos ", info.total),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )];

        if let Some(todo) = info.selected {
            spans.push(Span::styled(
                format!(" #{} {} ", todo.id, todo.due_date),
                Style::default().fg(Color::White).bg(Color::Blue),
            ));
        }

        if info.highlighted > 0 {
            spans.push(Span::styled(
                format!(" {} match ", info.highlighted),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ));
        }

        if let Some(error) = info.error {
            spans.push(Span::styled(
                format!(" {}", error),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        } else if let Some(status) = info.status {
            spans.push(Span::styled(
                format!(" {}", status),
                Style::default().fg(Color::Green),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl Component for Shell {
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }

        if let Some((menu, _)) = self.open_menu {
            if let Some(index) = self.menu_bar.entry_at(mouse.column, mouse.row) {
                return Ok(entry_action(menu, index));
            }
        }

        if let Some(menu) = self.menu_bar.menu_at(mouse.column, mouse.row) {
            return Ok(Some(Action::OpenMenu(menu.index())));
        }

        Ok(self
            .button_at(mouse.column, mouse.row)
            .map(|button| button.action()))
    }

    /// Draws everything but the table and the status line
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_shell_layout(area);
        let open = self.open_menu.map(|(menu, _)| menu);

        self.menu_bar.draw_bar(frame, layout.menu_bar, open);
        self.draw_toolbar(frame, layout.toolbar);
        self.draw_hints(frame, layout.help);
        Ok(())
    }
}
