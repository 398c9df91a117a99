use crate::models::Session;
use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay {
    pub day: u32,
    pub date: NaiveDate,
    pub sessions: Vec<Session>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarLayout {
    pub year: i32,
    pub month: u32,
    /// Weekday index of day 1, Sunday = 0.
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
}

/// Lays out the month containing `month_ref` and buckets `sessions` by day.
///
/// Sessions dated outside that month are ignored, so callers may pass any
/// superset of the month's sessions. Input order is kept within a bucket.
pub fn layout(month_ref: NaiveDate, sessions: &[Session]) -> CalendarLayout {
    let (first, last) = month_range(month_ref);

    let mut days: Vec<CalendarDay> = (0..i64::from(days_in_month(first)))
        .map(|offset| first + Duration::days(offset))
        .map(|date| CalendarDay {
            day: date.day(),
            date,
            sessions: Vec::new(),
        })
        .collect();

    for session in sessions {
        if session.date < first || session.date > last {
            continue;
        }
        if let Some(bucket) = days.get_mut(session.date.day0() as usize) {
            bucket.sessions.push(session.clone());
        }
    }

    CalendarLayout {
        year: first.year(),
        month: first.month(),
        leading_blanks: first.weekday().num_days_from_sunday(),
        days,
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        None => (NaiveDate::MAX - first).num_days() as u32 + 1,
    }
}

/// Inclusive first and last day of the month containing `month_ref`.
pub fn month_range(month_ref: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = first_of_month(month_ref);
    let last = first + Duration::days(i64::from(days_in_month(first)) - 1);
    (first, last)
}

/// One calendar month back. A day missing from the target month clamps to
/// its last day (Mar 31 -> Feb 29 in a leap year).
pub fn prev_month(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(1)).unwrap_or(date)
}

/// One calendar month forward, clamping like [`prev_month`].
pub fn next_month(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(1)).unwrap_or(date)
}

/// Parses a `YYYY-MM` month reference into the first day of that month.
pub fn parse_month(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", input.trim()), "%Y-%m-%d").ok()
}

pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}
