//! Loader for the price history file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{DataError, Result};
use crate::format::PRICE_FORMAT;
use crate::records::PriceRecord;
use crate::sentiment::column_index;

/// Required timestamp column.
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// Required price column.
pub const PRICE_COLUMN: &str = "price";

/// Optional volume column.
pub const VOLUME_COLUMN: &str = "volume";

/// Load the semicolon-separated price CSV at `path`, sorted ascending by
/// date.
///
/// The `timestamp` and `price` columns are required and strict: an
/// unparseable timestamp fails with [`DataError::DateFormat`], and a
/// non-numeric or non-positive price fails with
/// [`DataError::InvalidNumber`]. A malformed `volume` cell degrades to
/// `None` with a warning.
pub fn load_prices<P: AsRef<Path>>(path: P) -> Result<Vec<PriceRecord>> {
    let file = File::open(path.as_ref())?;
    read_prices(file)
}

/// Read price records from any byte source.
pub fn read_prices<R: Read>(reader: R) -> Result<Vec<PriceRecord>> {
    let source = PRICE_FORMAT;
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(source.delimiter)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let timestamp_idx = column_index(&headers, TIMESTAMP_COLUMN, source.name)?;
    let price_idx = column_index(&headers, PRICE_COLUMN, source.name)?;
    let volume_idx = headers.iter().position(|h| h == VOLUME_COLUMN);

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;

        let raw_date = row.get(timestamp_idx).unwrap_or_default();
        let date = source
            .parse_date(raw_date)
            .ok_or_else(|| DataError::DateFormat {
                source_name: source.name.to_string(),
                value: raw_date.to_string(),
            })?;

        let raw_price = row.get(price_idx).unwrap_or_default().trim();
        let price = raw_price
            .parse::<f64>()
            .ok()
            .filter(|price| *price > 0.0)
            .ok_or_else(|| DataError::InvalidNumber {
                source_name: source.name.to_string(),
                column: PRICE_COLUMN.to_string(),
                value: raw_price.to_string(),
            })?;

        let volume = volume_idx.and_then(|idx| {
            let raw = row.get(idx).unwrap_or_default().trim();
            if raw.is_empty() {
                return None;
            }
            let parsed = raw.parse::<f64>().ok().filter(|volume| *volume >= 0.0);
            if parsed.is_none() {
                eprintln!("warning: ignoring malformed volume '{raw}' for {date}");
            }
            parsed
        });

        records.push(PriceRecord {
            date,
            price,
            volume,
        });
    }

    records.sort_by_key(|record| record.date);
    Ok(records)
}
