//! Weekly and monthly resampling of sentiment scores.
//!
//! Weekly windows are labeled with the next date falling on the anchor
//! weekday, the date itself when it already does. A window with no records
//! produces no output row; zero-filling here would silently bias the inner
//! join downstream.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use coinpulse_data::SentimentRecord;
use serde::{Deserialize, Serialize};

/// Mean sentiment for one populated calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklySentiment {
    /// Week label, always on the anchor weekday.
    pub week: NaiveDate,

    /// Arithmetic mean of the scores in the window.
    pub mean_score: f64,

    /// Number of records in the window.
    pub observations: usize,
}

/// Mean sentiment for one populated calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlySentiment {
    /// Last calendar day of the month.
    pub month: NaiveDate,

    /// Arithmetic mean of the scores in the month.
    pub mean_score: f64,

    /// Number of records in the month.
    pub observations: usize,
}

/// Label a date with the next occurrence of `anchor` (inclusive).
pub fn week_label(date: NaiveDate, anchor: Weekday) -> NaiveDate {
    let anchor_day = anchor.num_days_from_monday() as i64;
    let current_day = date.weekday().num_days_from_monday() as i64;
    let days_ahead = (anchor_day - current_day).rem_euclid(7) as u64;
    date.checked_add_days(Days::new(days_ahead)).unwrap_or(date)
}

/// Last calendar day of the month `date` falls in.
pub fn month_label(date: NaiveDate) -> NaiveDate {
    let (year, month) = (date.year(), date.month());
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .unwrap_or(date)
}

/// Mean score per populated week, sorted ascending by label.
pub fn weekly_mean(records: &[SentimentRecord], anchor: Weekday) -> Vec<WeeklySentiment> {
    let mut windows: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = windows.entry(week_label(record.date, anchor)).or_insert((0.0, 0));
        entry.0 += record.score;
        entry.1 += 1;
    }
    windows
        .into_iter()
        .map(|(week, (sum, observations))| WeeklySentiment {
            week,
            mean_score: sum / observations as f64,
            observations,
        })
        .collect()
}

/// Mean score per populated month, sorted ascending by label.
pub fn monthly_mean(records: &[SentimentRecord]) -> Vec<MonthlySentiment> {
    let mut months: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = months.entry(month_label(record.date)).or_insert((0.0, 0));
        entry.0 += record.score;
        entry.1 += 1;
    }
    months
        .into_iter()
        .map(|(month, (sum, observations))| MonthlySentiment {
            month,
            mean_score: sum / observations as f64,
            observations,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn record(date: NaiveDate, score: f64) -> SentimentRecord {
        SentimentRecord {
            date,
            score,
            description: None,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2021-01-05 is a Tuesday.
    #[rstest]
    #[case(day(2021, 1, 5), day(2021, 1, 5))]
    #[case(day(2021, 1, 6), day(2021, 1, 12))]
    #[case(day(2021, 1, 4), day(2021, 1, 5))]
    #[case(day(2021, 1, 11), day(2021, 1, 12))]
    fn test_week_label_anchored_tuesday(#[case] date: NaiveDate, #[case] expected: NaiveDate) {
        assert_eq!(week_label(date, Weekday::Tue), expected);
    }

    #[test]
    fn test_weekly_mean_groups_by_window() {
        let records = vec![
            record(day(2021, 1, 4), 0.2),
            record(day(2021, 1, 5), 0.6),
            record(day(2021, 1, 13), -0.2),
        ];
        let weekly = weekly_mean(&records, Weekday::Tue);
        assert_eq!(weekly.len(), 2);
        assert_eq!(weekly[0].week, day(2021, 1, 5));
        assert_relative_eq!(weekly[0].mean_score, 0.4, epsilon = 1e-12);
        assert_eq!(weekly[0].observations, 2);
        assert_eq!(weekly[1].week, day(2021, 1, 19));
        assert_relative_eq!(weekly[1].mean_score, -0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_weeks_are_absent_not_zero() {
        // Records three weeks apart; the week between them must not appear.
        let records = vec![
            record(day(2021, 1, 5), 0.4),
            record(day(2021, 1, 19), -0.2),
        ];
        let weekly = weekly_mean(&records, Weekday::Tue);
        assert_eq!(weekly.len(), 2);
        assert!(weekly.iter().all(|w| w.observations > 0));
        assert!(!weekly.iter().any(|w| w.week == day(2021, 1, 12)));
    }

    #[test]
    fn test_no_records_no_rows() {
        assert!(weekly_mean(&[], Weekday::Tue).is_empty());
        assert!(monthly_mean(&[]).is_empty());
    }

    #[rstest]
    #[case(day(2021, 1, 15), day(2021, 1, 31))]
    #[case(day(2021, 12, 1), day(2021, 12, 31))]
    #[case(day(2024, 2, 10), day(2024, 2, 29))]
    fn test_month_label_is_month_end(#[case] date: NaiveDate, #[case] expected: NaiveDate) {
        assert_eq!(month_label(date), expected);
    }

    #[test]
    fn test_monthly_mean() {
        let records = vec![
            record(day(2021, 1, 5), 0.4),
            record(day(2021, 1, 25), 0.0),
            record(day(2021, 2, 2), -0.5),
        ];
        let monthly = monthly_mean(&records);
        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[0].month, day(2021, 1, 31));
        assert_relative_eq!(monthly[0].mean_score, 0.2, epsilon = 1e-12);
        assert_eq!(monthly[1].observations, 1);
    }
}
