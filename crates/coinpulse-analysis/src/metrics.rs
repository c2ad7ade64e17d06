//! Log return, volatility and intensity derivation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::join::JoinedRow;

/// A joined row extended with derived metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedRow {
    /// Calendar date of the row.
    pub date: NaiveDate,

    /// Price on that date.
    pub price: f64,

    /// Mean weekly sentiment on that date.
    pub sentiment: f64,

    /// ln(price) minus ln(price of the previous surviving joined row).
    pub log_return: f64,

    /// Absolute log return.
    pub volatility: f64,

    /// Absolute sentiment score.
    pub intensity: f64,
}

/// Derive returns, volatility and intensity from the joined sequence.
///
/// Returns are join-adjacent: the "previous" price is the previous row of
/// the joined sequence, not the previous calendar observation of the raw
/// price series. When the join drops intermediate weeks the return spans
/// more than 7 calendar days. The first joined row has no predecessor and
/// is excluded from the output, so `derive` yields `joined.len() - 1` rows.
///
/// # Errors
///
/// [`AnalysisError::EmptyJoin`] when `joined` is empty and
/// [`AnalysisError::InsufficientRows`] when it holds a single row; either
/// way no return can be computed.
pub fn derive(joined: &[JoinedRow]) -> Result<Vec<DerivedRow>> {
    match joined.len() {
        0 => return Err(AnalysisError::EmptyJoin),
        1 => return Err(AnalysisError::InsufficientRows { rows: 1 }),
        _ => {}
    }

    Ok(joined
        .windows(2)
        .map(|pair| {
            let (previous, current) = (&pair[0], &pair[1]);
            let log_return = current.price.ln() - previous.price.ln();
            DerivedRow {
                date: current.date,
                price: current.price,
                sentiment: current.sentiment,
                log_return,
                volatility: log_return.abs(),
                intensity: current.sentiment.abs(),
            }
        })
        .collect())
}
