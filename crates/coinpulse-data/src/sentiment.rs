//! Loader for the scored sentiment file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{DataError, Result};
use crate::format::SENTIMENT_FORMAT;
use crate::records::SentimentRecord;

/// Required date column.
pub const DATE_COLUMN: &str = "Date";

/// Required numeric score column.
pub const SCORE_COLUMN: &str = "Accurate Sentiments";

/// Optional free-text column.
pub const DESCRIPTION_COLUMN: &str = "Short Description";

/// Load the sentiment CSV at `path`, sorted ascending by date.
///
/// Fails with [`DataError::MissingColumn`] if the `Date` or score column is
/// absent and [`DataError::DateFormat`] if any date cell cannot be parsed.
/// Rows whose score cell is not numeric are dropped with a warning to
/// stderr; a missing or empty description becomes `None`.
pub fn load_sentiment<P: AsRef<Path>>(path: P) -> Result<Vec<SentimentRecord>> {
    let file = File::open(path.as_ref())?;
    read_sentiment(file)
}

/// Read sentiment records from any byte source (used by [`load_sentiment`]
/// and by tests).
pub fn read_sentiment<R: Read>(reader: R) -> Result<Vec<SentimentRecord>> {
    let source = SENTIMENT_FORMAT;
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(source.delimiter)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let date_idx = column_index(&headers, DATE_COLUMN, source.name)?;
    let score_idx = column_index(&headers, SCORE_COLUMN, source.name)?;
    let description_idx = headers.iter().position(|h| h == DESCRIPTION_COLUMN);

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;

        let raw_date = row.get(date_idx).unwrap_or_default();
        let date = source
            .parse_date(raw_date)
            .ok_or_else(|| DataError::DateFormat {
                source_name: source.name.to_string(),
                value: raw_date.to_string(),
            })?;

        let raw_score = row.get(score_idx).unwrap_or_default().trim();
        let Ok(score) = raw_score.parse::<f64>() else {
            eprintln!(
                "warning: dropping {} row for {date}: non-numeric score '{raw_score}'",
                source.name
            );
            continue;
        };

        let description = description_idx
            .and_then(|idx| row.get(idx))
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        records.push(SentimentRecord {
            date,
            score,
            description,
        });
    }

    records.sort_by_key(|record| record.date);
    Ok(records)
}

pub(crate) fn column_index(
    headers: &csv::StringRecord,
    column: &str,
    source_name: &str,
) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| DataError::MissingColumn {
            source_name: source_name.to_string(),
            column: column.to_string(),
        })
}
