//! ASCII summary table for terminal display.

use coinpulse_analysis::BucketVolatility;

/// Format the volatility-by-quartile aggregate as an ASCII table.
///
/// # Examples
///
/// ```
/// use coinpulse_analysis::{BucketVolatility, QuantileBucket};
/// use coinpulse_output::volatility_table;
///
/// let buckets = vec![BucketVolatility {
///     bucket: QuantileBucket::Q1,
///     mean_volatility: 0.0513,
///     observations: 12,
/// }];
/// let table = volatility_table(&buckets);
/// assert!(table.contains("Q1"));
/// assert!(table.contains("0.051300"));
/// ```
pub fn volatility_table(buckets: &[BucketVolatility]) -> String {
    let mut output = String::new();

    output.push_str("\nMean Volatility by Sentiment Intensity Quartile\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "{:<10} {:>8} {:>20}\n",
        "Quartile", "Rows", "Mean Volatility"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for bucket in buckets {
        output.push_str(&format!(
            "{:<10} {:>8} {:>20.6}\n",
            bucket.bucket.to_string(),
            bucket.observations,
            bucket.mean_volatility
        ));
    }

    output.push_str(&"=".repeat(60));
    output.push('\n');

    output
}
