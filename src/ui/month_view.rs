use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::app::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(&self) -> u32 {
        let Some(first) = self.first_day() else { return 0 };
        let Some(next_first) = self.succ().first_day() else { return 0 };
        next_first.signed_duration_since(first).num_days() as u32
    }

    pub fn pred(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn succ(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// Long label such as "March 2025".
    pub fn label(&self) -> String {
        self.first_day()
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| self.to_string())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .map(Self::from_date)
            .map_err(|_| format!("Invalid month '{}'. Use YYYY-MM.", s))
    }
}

/// One grid slot. A cell without a day is leading padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub day: Option<u32>,
    pub person: Option<String>,
    pub date: Option<NaiveDate>,
}

impl CalendarCell {
    pub fn blank() -> Self {
        Self { day: None, person: None, date: None }
    }

    pub fn for_date(date: NaiveDate, person: Option<String>) -> Self {
        Self { day: Some(date.day()), person, date: Some(date) }
    }

    pub fn is_blank(&self) -> bool {
        self.day.is_none()
    }
}

/// Monday-first cells for `month`: leading blanks, then one cell per day.
/// The last row is not padded.
pub fn build<F>(month: YearMonth, resolve_duty: F) -> Vec<CalendarCell>
where
    F: Fn(NaiveDate) -> Option<String>,
{
    let Some(first_day) = month.first_day() else {
        return Vec::new();
    };

    let leading_blanks = first_day.weekday().num_days_from_monday() as usize;
    let days_in_month = month.days_in_month();

    let mut cells = Vec::with_capacity(leading_blanks + days_in_month as usize);
    cells.extend((0..leading_blanks).map(|_| CalendarCell::blank()));

    for day in 1..=days_in_month {
        let Some(date) = NaiveDate::from_ymd_opt(month.year, month.month, day) else {
            continue;
        };
        cells.push(CalendarCell::for_date(date, resolve_duty(date)));
    }

    cells
}

/// Splits a flat grid into rows of up to seven cells.
pub fn weeks(cells: &[CalendarCell]) -> Vec<&[CalendarCell]> {
    cells.chunks(7).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub month: YearMonth,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub cell: CalendarCell,
    pub is_today: bool,
    pub is_rotation_start: bool,
}

pub fn calculate_layout(state: &AppState, today: NaiveDate) -> MonthLayout {
    let cells = state.build(state.display_month);

    let weeks = weeks(&cells)
        .into_iter()
        .map(|row| Week {
            days: row
                .iter()
                .map(|cell| DayCell {
                    is_today: cell.date == Some(today),
                    is_rotation_start: cell.date == Some(state.rotation_start()),
                    cell: cell.clone(),
                })
                .collect(),
        })
        .collect();

    MonthLayout { month: state.display_month, weeks }
}
