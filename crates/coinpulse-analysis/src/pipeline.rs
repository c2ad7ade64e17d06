//! The sentiment/volatility correlation pipeline.

use chrono::Weekday;
use coinpulse_data::{PriceRecord, SentimentRecord};

use crate::error::Result;
use crate::join::join_on_date;
use crate::metrics::derive;
use crate::quantile::{BucketVolatility, volatility_by_intensity};
use crate::resample::weekly_mean;

/// Weekday the weekly sentiment windows are anchored on, matching the
/// cadence of the price export.
pub const WEEK_ANCHOR: Weekday = Weekday::Tue;

/// Run the full correlation pipeline: weekly resample, date join, metric
/// derivation and quartile aggregation.
///
/// # Errors
///
/// Propagates [`crate::AnalysisError`] when the join yields fewer than two
/// rows.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use coinpulse_analysis::sentiment_volatility_pipeline;
/// use coinpulse_data::{PriceRecord, SentimentRecord};
///
/// let day = |d: u32| NaiveDate::from_ymd_opt(2021, 1, d).unwrap();
/// let sentiments = vec![
///     SentimentRecord { date: day(5), score: 0.4, description: None },
///     SentimentRecord { date: day(19), score: -0.2, description: None },
/// ];
/// let prices = vec![
///     PriceRecord { date: day(5), price: 100.0, volume: None },
///     PriceRecord { date: day(12), price: 105.0, volume: None },
///     PriceRecord { date: day(19), price: 95.0, volume: None },
/// ];
///
/// let buckets = sentiment_volatility_pipeline(&prices, &sentiments).unwrap();
/// assert_eq!(buckets.len(), 1);
/// assert!((buckets[0].mean_volatility - (100.0f64 / 95.0).ln()).abs() < 1e-12);
/// ```
pub fn sentiment_volatility_pipeline(
    prices: &[PriceRecord],
    sentiments: &[SentimentRecord],
) -> Result<Vec<BucketVolatility>> {
    let weekly = weekly_mean(sentiments, WEEK_ANCHOR);
    let joined = join_on_date(prices, &weekly);
    let derived = derive(&joined)?;
    Ok(volatility_by_intensity(&derived))
}
