#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod classify;
pub mod error;
pub mod join;
pub mod metrics;
pub mod pipeline;
pub mod quantile;
pub mod resample;
pub mod text;

pub use classify::{
    DEAD_ZONE, IntensityBand, PolarityIntensityTable, SentimentClass, SentimentDistribution,
    classify, polarity,
};
pub use error::{AnalysisError, Result};
pub use join::{JoinedRow, join_on_date};
pub use metrics::{DerivedRow, derive};
pub use pipeline::{WEEK_ANCHOR, sentiment_volatility_pipeline};
pub use quantile::{BucketVolatility, QuantileBucket, volatility_by_intensity};
pub use resample::{MonthlySentiment, WeeklySentiment, monthly_mean, weekly_mean};
pub use text::{STOPWORDS, tokenize, word_frequencies};
