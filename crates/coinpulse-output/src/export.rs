//! JSON and CSV export of the volatility summary.

use std::fs::File;
use std::path::Path;

use coinpulse_analysis::BucketVolatility;

use crate::error::Result;

/// Write the volatility summary as pretty-printed JSON.
pub fn write_summary_json(buckets: &[BucketVolatility], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, buckets)?;
    Ok(())
}

/// Write the volatility summary as CSV with a header row.
pub fn write_summary_csv(buckets: &[BucketVolatility], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for bucket in buckets {
        writer.serialize(bucket)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinpulse_analysis::QuantileBucket;

    fn sample() -> Vec<BucketVolatility> {
        vec![
            BucketVolatility {
                bucket: QuantileBucket::Q1,
                mean_volatility: 0.012,
                observations: 7,
            },
            BucketVolatility {
                bucket: QuantileBucket::Q2,
                mean_volatility: 0.034,
                observations: 6,
            },
        ]
    }

    #[test]
    fn test_json_export_round_trips() {
        let path = std::env::temp_dir().join(format!(
            "coinpulse_summary_{}.json",
            std::process::id()
        ));
        write_summary_json(&sample(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<BucketVolatility> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, sample());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_csv_export_has_header_and_rows() {
        let path = std::env::temp_dir().join(format!(
            "coinpulse_summary_{}.csv",
            std::process::id()
        ));
        write_summary_csv(&sample(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("bucket,mean_volatility,observations"));
        assert_eq!(lines.next(), Some("Q1,0.012,7"));

        std::fs::remove_file(&path).ok();
    }
}
