//! Loader for plain headline files.
//!
//! Headline exports (CNBC, Guardian, Reuters) carry a single `Headlines`
//! column of interest; everything else in the file is ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::Result;
use crate::format::HEADLINE_FORMAT;
use crate::sentiment::column_index;

/// Required headline column.
pub const HEADLINES_COLUMN: &str = "Headlines";

/// Load the non-empty headlines from the CSV at `path`, in file order.
pub fn load_headlines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path.as_ref())?;
    read_headlines(file)
}

/// Read headlines from any byte source.
pub fn read_headlines<R: Read>(reader: R) -> Result<Vec<String>> {
    let source = HEADLINE_FORMAT;
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(source.delimiter)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let headline_idx = column_index(&headers, HEADLINES_COLUMN, source.name)?;

    let mut headlines = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let text = row.get(headline_idx).unwrap_or_default().trim();
        if !text.is_empty() {
            headlines.push(text.to_string());
        }
    }
    Ok(headlines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;

    #[test]
    fn test_blank_headlines_skipped() {
        let input = "Headlines,Time\nBitcoin surges past 60k,9am\n,10am\nMiners relocate,11am\n";
        let headlines = read_headlines(input.as_bytes()).unwrap();
        assert_eq!(headlines.len(), 2);
        assert_eq!(headlines[0], "Bitcoin surges past 60k");
    }

    #[test]
    fn test_missing_headlines_column() {
        let input = "Title\nBitcoin surges\n";
        let err = read_headlines(input.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { .. }));
    }
}
