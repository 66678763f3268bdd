use chrono::{Days, NaiveDate};

use super::dates::{days_between, monday_of_week};

/// Length of one duty period. Periods always begin on a Monday.
pub const PERIOD_DAYS: i64 = 14;

/// Index of the period containing `target`, or `None` before the rotation starts.
pub fn period_index(rotation_start: NaiveDate, target: NaiveDate) -> Option<i64> {
    if target < rotation_start {
        return None;
    }
    let elapsed = days_between(monday_of_week(target), rotation_start);
    Some(elapsed.div_euclid(PERIOD_DAYS))
}

/// Same index, counted as elapsed Mondays with two Mondays per period.
pub fn period_index_by_monday_count(rotation_start: NaiveDate, target: NaiveDate) -> Option<i64> {
    if target < rotation_start {
        return None;
    }
    let elapsed = days_between(monday_of_week(target), rotation_start);
    let monday_count = elapsed.div_euclid(7);
    Some(monday_count.div_euclid(2))
}

/// First and last day of `period`, Monday through Sunday.
pub fn period_bounds(rotation_start: NaiveDate, period: i64) -> Option<(NaiveDate, NaiveDate)> {
    let offset = u64::try_from(period.checked_mul(PERIOD_DAYS)?).ok()?;
    let first = rotation_start.checked_add_days(Days::new(offset))?;
    let last = first.checked_add_days(Days::new(PERIOD_DAYS as u64 - 1))?;
    Some((first, last))
}

pub fn resolve<'a>(
    participants: &'a [String],
    rotation_start: NaiveDate,
    target: NaiveDate,
) -> Option<&'a str> {
    if participants.is_empty() {
        return None;
    }
    let period = period_index(rotation_start, target)?;
    let slot = period.rem_euclid(participants.len() as i64) as usize;
    participants.get(slot).map(String::as_str)
}

/// A roster paired with its start date.
#[derive(Debug, Clone, Copy)]
pub struct Rotation<'a> {
    pub participants: &'a [String],
    pub start: NaiveDate,
}

impl<'a> Rotation<'a> {
    pub fn new(participants: &'a [String], start: NaiveDate) -> Self {
        Self { participants, start }
    }

    pub fn on_duty(&self, date: NaiveDate) -> Option<&'a str> {
        resolve(self.participants, self.start, date)
    }

    pub fn period_of(&self, date: NaiveDate) -> Option<i64> {
        period_index(self.start, date)
    }

    pub fn bounds_of(&self, date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        period_bounds(self.start, self.period_of(date)?)
    }
}
