//! Calendar helpers for activity dates and Monday-aligned weeks.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime};

/// Number of days covered by one timeline bin.
pub const DAYS_PER_WEEK: u64 = 7;

/// Parse a calendar date as sent by the activity feed.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive ISO timestamps
/// (`YYYY-MM-DDTHH:MM:SS[.fff]`). The time of day is discarded.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|timestamp| timestamp.date())
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(offset))
        .unwrap_or(NaiveDate::MIN)
}

/// Last day (Sunday) of the week starting at `start`.
pub fn week_end(start: NaiveDate) -> NaiveDate {
    start
        .checked_add_days(Days::new(DAYS_PER_WEEK - 1))
        .unwrap_or(NaiveDate::MAX)
}

/// Week starts from the Monday on or before `first` up to and including
/// the last one not after `last`.
pub fn week_starts(first: NaiveDate, last: NaiveDate) -> WeekStarts {
    WeekStarts {
        next: Some(week_start(first)),
        last,
    }
}

/// Iterator returned by [`week_starts`].
#[derive(Debug, Clone)]
pub struct WeekStarts {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl Iterator for WeekStarts {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|date| *date <= self.last)?;
        self.next = current.checked_add_days(Days::new(DAYS_PER_WEEK));
        Some(current)
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod time_tests;
