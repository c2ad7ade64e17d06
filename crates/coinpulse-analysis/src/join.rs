//! Inner join of price rows and weekly sentiment on calendar date.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use coinpulse_data::PriceRecord;
use serde::{Deserialize, Serialize};

use crate::resample::WeeklySentiment;

/// One date present in both the price series and the weekly sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JoinedRow {
    /// Shared calendar date.
    pub date: NaiveDate,

    /// Price on that date.
    pub price: f64,

    /// Mean sentiment of the week labeled with that date.
    pub sentiment: f64,
}

/// Inner-join `prices` against `weekly` on exact date equality.
///
/// Both inputs are date-normalized already (the loader strips time-of-day,
/// the resampler emits anchor-weekday labels), so equality is plain
/// `NaiveDate` comparison. Rows present on only one side are dropped
/// silently. The result preserves the chronological order of `prices`.
pub fn join_on_date(prices: &[PriceRecord], weekly: &[WeeklySentiment]) -> Vec<JoinedRow> {
    let sentiment_by_week: BTreeMap<NaiveDate, f64> = weekly
        .iter()
        .map(|window| (window.week, window.mean_score))
        .collect();

    prices
        .iter()
        .filter_map(|row| {
            sentiment_by_week.get(&row.date).map(|sentiment| JoinedRow {
                date: row.date,
                price: row.price,
                sentiment: *sentiment,
            })
        })
        .collect()
}
