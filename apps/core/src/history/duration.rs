//! Month-granularity duration formatting.
//!
//! Durations are computed from calendar year/month components only;
//! day-of-month is ignored by contract. This is presentation arithmetic, not
//! exact elapsed time.

use chrono::{Datelike, NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalEnd {
    Date(NaiveDate),
    /// A still-running position; resolved against "today" at format time.
    Ongoing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveDate,
    pub end: IntervalEnd,
}

fn total_months(start: NaiveDate, end: NaiveDate) -> i32 {
    let years = end.year() - start.year();
    let months = end.month() as i32 - start.month() as i32;
    years * 12 + months
}

/// `"3か月"`, `"2年"`, `"1年4か月"`. An end before the start clamps to zero
/// months rather than erroring.
pub fn format_duration(start: NaiveDate, end: NaiveDate) -> String {
    let months = total_months(start, end).max(0);
    let years = months / 12;
    let remainder = months % 12;

    if years == 0 {
        format!("{remainder}か月")
    } else if remainder == 0 {
        format!("{years}年")
    } else {
        format!("{years}年{remainder}か月")
    }
}

/// Formats an interval, resolving `Ongoing` against the injected `today`.
pub fn format_interval(interval: &Interval, today: NaiveDate) -> String {
    let end = match interval.end {
        IntervalEnd::Date(end) => end,
        IntervalEnd::Ongoing => today,
    };
    format_duration(interval.start, end)
}

/// Wall-clock convenience. Tests go through [`format_interval`] with a fixed
/// `today` instead.
pub fn format_interval_now(interval: &Interval) -> String {
    format_interval(interval, Utc::now().naive_utc().date())
}
