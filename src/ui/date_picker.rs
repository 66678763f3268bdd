use chrono::{Datelike, Days, NaiveDate};

use crate::schedule::dates::{is_monday, nearest_monday_on_or_after};
use crate::ui::month_view::{self, CalendarCell, YearMonth};

/// Tentative start-date selection. Nothing is committed until `apply`.
#[derive(Debug, Clone, PartialEq)]
pub struct DatePicker {
    pub month: YearMonth,
    pub selected: NaiveDate,
}

impl DatePicker {
    pub fn open_at(start: NaiveDate) -> Self {
        Self {
            month: YearMonth::from_date(start),
            selected: start,
        }
    }

    pub fn cells(&self) -> Vec<CalendarCell> {
        month_view::build(self.month, |_| None)
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected = date;
        self.month = YearMonth::from_date(date);
    }

    pub fn move_days(&mut self, delta: i64) {
        let magnitude = Days::new(delta.unsigned_abs());
        let moved = if delta >= 0 {
            self.selected.checked_add_days(magnitude)
        } else {
            self.selected.checked_sub_days(magnitude)
        };
        if let Some(date) = moved {
            self.select(date);
        }
    }

    pub fn previous_month(&mut self) {
        self.shift_month(self.month.pred());
    }

    pub fn next_month(&mut self) {
        self.shift_month(self.month.succ());
    }

    // Keeps the selected day-of-month, clamped to the target month's length.
    fn shift_month(&mut self, target: YearMonth) {
        let day = self.selected.day().min(target.days_in_month());
        if let Some(date) = NaiveDate::from_ymd_opt(target.year, target.month, day) {
            self.selected = date;
        }
        self.month = target;
    }

    pub fn selection_is_monday(&self) -> bool {
        is_monday(self.selected)
    }

    /// The date that `apply` would commit.
    pub fn resolved_start(&self) -> NaiveDate {
        nearest_monday_on_or_after(self.selected)
    }

    pub fn selection_hint(&self) -> &'static str {
        if self.selection_is_monday() {
            "(Monday)"
        } else {
            "(Will adjust to next Monday)"
        }
    }
}
