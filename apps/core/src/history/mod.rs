// Work-history presentation helpers: month-granularity durations and the
// period labels shown next to each position.

pub mod duration;

pub use duration::{format_duration, format_interval, Interval, IntervalEnd};

use chrono::{Datelike, NaiveDate};

use crate::models::WorkHistoryRow;

/// Derives the interval of a work-history row; an absent `end_date` means the
/// position is current.
pub fn interval_of(row: &WorkHistoryRow) -> Interval {
    Interval {
        start: row.start_date,
        end: row
            .end_date
            .map(IntervalEnd::Date)
            .unwrap_or(IntervalEnd::Ongoing),
    }
}

/// `"2021/04 〜 2023/03"` for finished positions, `"2021/04 〜 現在"` for
/// current ones.
pub fn period_label(interval: &Interval) -> String {
    match interval.end {
        IntervalEnd::Date(end) => format!("{} 〜 {}", year_month(interval.start), year_month(end)),
        IntervalEnd::Ongoing => format!("{} 〜 現在", year_month(interval.start)),
    }
}

fn year_month(date: NaiveDate) -> String {
    format!("{}/{:02}", date.year(), date.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(start: (i32, u32), end: Option<(i32, u32)>) -> WorkHistoryRow {
        WorkHistoryRow {
            id: 1,
            company: "株式会社Example".to_string(),
            position: "エンジニア".to_string(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, 1).unwrap(),
            end_date: end.map(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1).unwrap()),
            description: String::new(),
        }
    }

    #[test]
    fn test_interval_of_finished_position() {
        let interval = interval_of(&row((2021, 4), Some((2023, 3))));
        assert_eq!(period_label(&interval), "2021/04 〜 2023/03");
    }

    #[test]
    fn test_interval_of_current_position() {
        let interval = interval_of(&row((2021, 4), None));
        assert_eq!(interval.end, IntervalEnd::Ongoing);
        assert_eq!(period_label(&interval), "2021/04 〜 現在");
    }

    #[test]
    fn test_month_is_zero_padded() {
        let interval = interval_of(&row((2021, 4), Some((2021, 12))));
        assert_eq!(period_label(&interval), "2021/04 〜 2021/12");
    }
}
