//! Integration tests for the sentiment/volatility correlation pipeline.

use approx::assert_relative_eq;
use chrono::{NaiveDate, Weekday};
use coinpulse_analysis::{
    AnalysisError, QuantileBucket, derive, join_on_date, sentiment_volatility_pipeline,
    weekly_mean,
};
use coinpulse_data::{PriceRecord, SentimentRecord};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sentiment(date: NaiveDate, score: f64) -> SentimentRecord {
    SentimentRecord {
        date,
        score,
        description: None,
    }
}

fn price(date: NaiveDate, price: f64) -> PriceRecord {
    PriceRecord {
        date,
        price,
        volume: None,
    }
}

#[test]
fn test_reference_scenario_end_to_end() {
    // Two populated sentiment weeks ending 2021-01-05 (mean 0.4) and
    // 2021-01-19 (mean -0.2); three weekly price rows.
    let sentiments = vec![
        sentiment(day(2021, 1, 4), 0.3),
        sentiment(day(2021, 1, 5), 0.5),
        sentiment(day(2021, 1, 19), -0.2),
    ];
    let prices = vec![
        price(day(2021, 1, 5), 100.0),
        price(day(2021, 1, 12), 105.0),
        price(day(2021, 1, 19), 95.0),
    ];

    let weekly = weekly_mean(&sentiments, Weekday::Tue);
    assert_eq!(weekly.len(), 2);
    assert_relative_eq!(weekly[0].mean_score, 0.4, epsilon = 1e-12);

    // 2021-01-12 has a price but no sentiment week and is dropped.
    let joined = join_on_date(&prices, &weekly);
    assert_eq!(joined.len(), 2);
    assert_eq!(joined[0].date, day(2021, 1, 5));
    assert_eq!(joined[1].date, day(2021, 1, 19));

    // One derived row: the return bridges the dropped week, using the last
    // surviving joined price as its predecessor.
    let derived = derive(&joined).unwrap();
    assert_eq!(derived.len(), 1);
    assert_relative_eq!(
        derived[0].log_return,
        (95.0f64 / 100.0).ln(),
        epsilon = 1e-12
    );
    assert_relative_eq!(derived[0].intensity, 0.2, epsilon = 1e-12);

    let buckets = sentiment_volatility_pipeline(&prices, &sentiments).unwrap();
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].bucket, QuantileBucket::Q1);
    assert_relative_eq!(
        buckets[0].mean_volatility,
        (100.0f64 / 95.0).ln(),
        epsilon = 1e-12
    );
}

#[test]
fn test_pipeline_with_no_shared_dates() {
    // Sentiment lands on Tuesdays, prices on Wednesdays: empty join.
    let sentiments = vec![sentiment(day(2021, 1, 5), 0.4)];
    let prices = vec![
        price(day(2021, 1, 6), 100.0),
        price(day(2021, 1, 13), 105.0),
    ];
    let err = sentiment_volatility_pipeline(&prices, &sentiments).unwrap_err();
    assert_eq!(err, AnalysisError::EmptyJoin);
}

#[test]
fn test_pipeline_with_single_joined_row() {
    let sentiments = vec![sentiment(day(2021, 1, 5), 0.4)];
    let prices = vec![
        price(day(2021, 1, 5), 100.0),
        price(day(2021, 1, 13), 105.0),
    ];
    let err = sentiment_volatility_pipeline(&prices, &sentiments).unwrap_err();
    assert_eq!(err, AnalysisError::InsufficientRows { rows: 1 });
}

#[test]
fn test_larger_run_fills_quartiles() {
    // Eight consecutive Tuesdays with distinct intensities and prices.
    let tuesdays: Vec<NaiveDate> = (0..9u64)
        .map(|w| day(2021, 1, 5) + chrono::Days::new(7 * w))
        .collect();
    let scores = [0.05, -0.1, 0.2, -0.3, 0.4, -0.5, 0.6, -0.7, 0.8];
    let price_path = [
        100.0, 104.0, 99.0, 108.0, 95.0, 112.0, 90.0, 120.0, 85.0,
    ];

    let sentiments: Vec<_> = tuesdays
        .iter()
        .zip(scores)
        .map(|(date, score)| sentiment(*date, score))
        .collect();
    let prices: Vec<_> = tuesdays
        .iter()
        .zip(price_path)
        .map(|(date, value)| price(*date, value))
        .collect();

    let buckets = sentiment_volatility_pipeline(&prices, &sentiments).unwrap();
    assert_eq!(buckets.len(), 4);
    assert_eq!(buckets.iter().map(|b| b.observations).sum::<usize>(), 8);
    assert!(buckets.iter().all(|b| b.mean_volatility > 0.0));
}
