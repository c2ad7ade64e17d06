#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod charts;
pub mod config;
pub mod error;
pub mod export;
pub mod table;

pub use charts::{polarity_stack, sentiment_pie, time_series, volatility_bars, word_bars};
pub use config::RenderConfig;
pub use error::{OutputError, Result};
pub use export::{write_summary_csv, write_summary_json};
pub use table::volatility_table;
