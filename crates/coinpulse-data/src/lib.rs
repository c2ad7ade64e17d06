#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod format;
pub mod headlines;
pub mod price;
pub mod records;
pub mod sentiment;

pub use error::{DataError, Result};
pub use format::{HEADLINE_FORMAT, PRICE_FORMAT, SENTIMENT_FORMAT, SourceFormat};
pub use headlines::load_headlines;
pub use price::load_prices;
pub use records::{PriceRecord, SentimentRecord};
pub use sentiment::load_sentiment;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
