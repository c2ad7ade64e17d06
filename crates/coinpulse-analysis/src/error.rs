//! Error types for analysis operations.

use thiserror::Error;

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur in the correlation pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The inner join of price rows and weekly sentiment produced no rows.
    #[error("price and sentiment series share no dates, nothing to analyze")]
    EmptyJoin,

    /// Too few joined rows to compute a single return.
    #[error("need at least 2 joined rows to compute a return, got {rows}")]
    InsufficientRows {
        /// Number of joined rows that survived the join.
        rows: usize,
    },
}
