//! Record types produced by the loaders.
//!
//! All records are immutable after construction and carry date-only
//! timestamps; any time-of-day present in the raw input is stripped by the
//! loader before a record is built.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One scored news item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    /// Publication date.
    pub date: NaiveDate,

    /// Signed sentiment score, practically in [-1, 1] but not clamped.
    pub score: f64,

    /// Free-text description of the news item, when present.
    pub description: Option<String>,
}

/// One price observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Observation date (normalized to midnight).
    pub date: NaiveDate,

    /// Closing price in USD; always positive.
    pub price: f64,

    /// Traded volume, when the source carries it.
    pub volume: Option<f64>,
}
