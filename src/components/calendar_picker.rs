//! Month-grid date picker

use crate::model::CalendarState;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Rows the picker needs: title, weekday header, up to six weeks
pub const CALENDAR_HEIGHT: u16 = 8;

/// Apply a calendar navigation key. Returns true if the key was consumed.
pub fn handle_calendar_key(calendar: &mut CalendarState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => calendar.prev_day(),
        KeyCode::Right | KeyCode::Char('l') => calendar.next_day(),
        KeyCode::Up | KeyCode::Char('k') => calendar.prev_week(),
        KeyCode::Down | KeyCode::Char('j') => calendar.next_week(),
        KeyCode::PageUp | KeyCode::Char('<') => calendar.prev_month(),
        KeyCode::PageDown | KeyCode::Char('>') => calendar.next_month(),
        KeyCode::Char('t') => calendar.jump_to_today(),
        _ => return false,
    }
    true
}

/// Render the selected month as a grid, marking the selected day and today
pub fn render_calendar(calendar: &CalendarState, focused: bool) -> Vec<Line<'static>> {
    let today = Local::now().date_naive();
    let selected = calendar.selected();

    let title_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{:^18}", calendar.month_title()), title_style),
            Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(
            WEEKDAYS
                .iter()
                .map(|d| Span::styled(format!("{:>3}", d), Style::default().fg(Color::Yellow)))
                .collect::<Vec<_>>(),
        ),
    ];

    for week in calendar.month_grid() {
        let spans: Vec<Span> = week
            .iter()
            .map(|day| match day {
                Some(date) => {
                    let text = format!("{:>3}", date.format("%-d"));
                    let style = if *date == selected {
                        if focused {
                            Style::default()
                                .fg(Color::Black)
                                .bg(Color::Cyan)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::Black).bg(Color::DarkGray)
                        }
                    } else if *date == today {
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    Span::styled(text, style)
                }
                None => Span::raw("   "),
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines
}
