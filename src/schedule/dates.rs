use chrono::{Datelike, Days, Local, NaiveDate, NaiveDateTime, Weekday};

/// Monday on or before `date`.
///
/// In the first days of the representable range, where no such Monday
/// exists, this returns the following Monday instead. The result is always
/// a Monday.
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(offset))
        .unwrap_or_else(|| nearest_monday_on_or_after(date))
}

/// `date` itself when it is a Monday, otherwise the following Monday.
///
/// Past the last representable Monday this falls back to the preceding one.
pub fn nearest_monday_on_or_after(date: NaiveDate) -> NaiveDate {
    let days_until_monday = match date.weekday() {
        Weekday::Mon => return date,
        Weekday::Sun => 1,
        other => 8 - other.number_from_monday() as u64,
    };
    date.checked_add_days(Days::new(days_until_monday))
        .unwrap_or_else(|| monday_of_week(date))
}

pub fn is_monday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}

pub fn is_same_calendar_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Whole days from `b` to `a`; negative when `a` is earlier.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    a.signed_duration_since(b).num_days()
}

pub fn to_calendar_date(timestamp: NaiveDateTime) -> NaiveDate {
    timestamp.date()
}

/// The local calendar date right now.
pub fn today() -> NaiveDate {
    to_calendar_date(Local::now().naive_local())
}
