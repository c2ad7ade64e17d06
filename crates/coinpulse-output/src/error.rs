//! Error types for rendering and export.

use thiserror::Error;

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

/// Errors that can occur while rendering charts or exporting results.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Chart backend or drawing error.
    #[error("chart rendering error: {0}")]
    Chart(String),

    /// Nothing to draw.
    #[error("no data to render for {chart}")]
    EmptyChart {
        /// Name of the chart that received no data.
        chart: String,
    },

    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
