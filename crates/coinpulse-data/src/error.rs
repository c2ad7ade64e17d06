//! Error types for data loading.

use thiserror::Error;

/// Result type for data loading operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading an input file.
#[derive(Debug, Error)]
pub enum DataError {
    /// A required column is absent from the input header.
    #[error("missing required column '{column}' in {source_name}")]
    MissingColumn {
        /// Name of the input the column was expected in.
        source_name: String,
        /// Name of the missing column.
        column: String,
    },

    /// A date cell does not match any accepted format for its source.
    #[error("unparseable date '{value}' in {source_name}")]
    DateFormat {
        /// Name of the input the cell came from.
        source_name: String,
        /// Offending cell contents.
        value: String,
    },

    /// A required numeric cell could not be parsed or is out of range.
    #[error("invalid value '{value}' for column '{column}' in {source_name}")]
    InvalidNumber {
        /// Name of the input the cell came from.
        source_name: String,
        /// Column the cell belongs to.
        column: String,
        /// Offending cell contents.
        value: String,
    },

    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
