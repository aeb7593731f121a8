//! Date picker state for the add/edit dialogs

use super::todo::format_date;
use chrono::{Datelike, Days, Local, Months, NaiveDate};

/// Calendar selection, starting on today's date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    selected: NaiveDate,
}

impl Default for CalendarState {
    fn default() -> Self {
        Self::today()
    }
}

impl CalendarState {
    pub fn new(selected: NaiveDate) -> Self {
        Self { selected }
    }

    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    /// Selected date as stored text
    pub fn selected_text(&self) -> String {
        format_date(self.selected)
    }

    pub fn next_day(&mut self) {
        self.shift_days(1, true);
    }

    pub fn prev_day(&mut self) {
        self.shift_days(1, false);
    }

    pub fn next_week(&mut self) {
        self.shift_days(7, true);
    }

    pub fn prev_week(&mut self) {
        self.shift_days(7, false);
    }

    /// Move one month forward, clamping to the last day of the month
    pub fn next_month(&mut self) {
        if let Some(date) = self.selected.checked_add_months(Months::new(1)) {
            self.selected = date;
        }
    }

    /// Move one month back, clamping to the last day of the month
    pub fn prev_month(&mut self) {
        if let Some(date) = self.selected.checked_sub_months(Months::new(1)) {
            self.selected = date;
        }
    }

    pub fn jump_to_today(&mut self) {
        self.selected = Local::now().date_naive();
    }

    fn shift_days(&mut self, days: u64, forward: bool) {
        let shifted = if forward {
            self.selected.checked_add_days(Days::new(days))
        } else {
            self.selected.checked_sub_days(Days::new(days))
        };
        if let Some(date) = shifted {
            self.selected = date;
        }
    }

    /// Weeks of the selected month, Monday first.
    ///
    /// Days outside the month are `None`.
    pub fn month_grid(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let Some(first) = self.selected.with_day(1) else {
            return Vec::new();
        };
        let lead = first.weekday().num_days_from_monday() as usize;

        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut slot = lead;
        let mut day = Some(first);

        while let Some(date) = day {
            if date.month() != first.month() {
                break;
            }
            week[slot] = Some(date);
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }
            day = date.succ_opt();
        }
        if slot > 0 {
            weeks.push(week);
        }

        weeks
    }

    /// Title such as "March 2024"
    pub fn month_title(&self) -> String {
        self.selected.format("%B %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_selected_text_is_iso() {
        let cal = CalendarState::new(date(2024, 1, 1));
        assert_eq!(cal.selected_text(), "2024-01-01");
    }

    #[test]
    fn test_day_and_week_navigation() {
        let mut cal = CalendarState::new(date(2024, 2, 28));
        cal.next_day();
        assert_eq!(cal.selected(), date(2024, 2, 29));
        cal.next_day();
        assert_eq!(cal.selected(), date(2024, 3, 1));
        cal.prev_week();
        assert_eq!(cal.selected(), date(2024, 2, 23));
        cal.next_week();
        cal.prev_day();
        assert_eq!(cal.selected(), date(2024, 2, 29));
    }

    #[test]
    fn test_month_navigation_clamps_to_month_end() {
        let mut cal = CalendarState::new(date(2024, 1, 31));
        cal.next_month();
        assert_eq!(cal.selected(), date(2024, 2, 29));
        cal.prev_month();
        assert_eq!(cal.selected(), date(2024, 1, 29));
    }

    #[test]
    fn test_month_grid_layout() {
        // March 2024 starts on a Friday and has 31 days
        let cal = CalendarState::new(date(2024, 3, 15));
        let grid = cal.month_grid();

        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0][3], None);
        assert_eq!(grid[0][4], Some(date(2024, 3, 1)));
        assert_eq!(grid[4][6], Some(date(2024, 3, 31)));

        let days: usize = grid.iter().flatten().filter(|d| d.is_some()).count();
        assert_eq!(days, 31);
    }

    #[test]
    fn test_month_title() {
        let cal = CalendarState::new(date(2024, 3, 15));
        assert_eq!(cal.month_title(), "March 2024");
    }
}
