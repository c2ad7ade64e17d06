//! Intensity quartile bucketing and volatility aggregation.
//!
//! Bucket boundaries are the empirical 25th/50th/75th percentiles of the
//! intensity values present in the run, not fixed thresholds. When many
//! rows share the same intensity the percentiles coincide; duplicate
//! boundaries are dropped and the cut silently yields fewer buckets.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::metrics::DerivedRow;

/// Intensity quartile label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum QuantileBucket {
    /// Lowest-intensity bucket.
    Q1,
    /// Second bucket.
    Q2,
    /// Third bucket.
    Q3,
    /// Highest-intensity bucket.
    Q4,
}

impl QuantileBucket {
    const ALL: [Self; 4] = [Self::Q1, Self::Q2, Self::Q3, Self::Q4];
}

/// Mean volatility of one occupied intensity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketVolatility {
    /// Bucket label; surviving buckets are relabeled contiguously after a
    /// collapse, so labels always start at Q1.
    pub bucket: QuantileBucket,

    /// Mean of the absolute log returns in the bucket.
    pub mean_volatility: f64,

    /// Number of rows in the bucket.
    pub observations: usize,
}

/// Empirical percentile with linear interpolation over a sorted sample.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    if sorted.len() == 1 {
        return sorted[0];
    }
    let position = q * (sorted.len() - 1) as f64;
    let below = position.floor() as usize;
    let above = position.ceil() as usize;
    let fraction = position - below as f64;
    sorted[below] + (sorted[above] - sorted[below]) * fraction
}

/// Deduplicated interior quartile boundaries of `values`.
fn quartile_breaks(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut breaks = Vec::with_capacity(3);
    for q in [0.25, 0.5, 0.75] {
        let boundary = percentile(&sorted, q);
        if breaks.last() != Some(&boundary) {
            breaks.push(boundary);
        }
    }
    breaks
}

/// Partition rows into intensity quartiles and average volatility per
/// occupied bucket, ordered by ascending intensity.
///
/// Bucket membership depends only on the multiset of intensity values, so
/// the result is invariant under reordering of `rows`. All-identical
/// intensities yield exactly one bucket; an empty input yields no buckets.
pub fn volatility_by_intensity(rows: &[DerivedRow]) -> Vec<BucketVolatility> {
    if rows.is_empty() {
        return Vec::new();
    }

    let intensities: Vec<f64> = rows.iter().map(|row| row.intensity).collect();
    let breaks = quartile_breaks(&intensities);

    // Right-closed intervals: a value equal to a boundary falls in the
    // lower bucket.
    let mut sums = [0.0f64; 4];
    let mut counts = [0usize; 4];
    for row in rows {
        let slot = breaks.iter().filter(|b| row.intensity > **b).count();
        sums[slot] += row.volatility;
        counts[slot] += 1;
    }

    let mut result = Vec::new();
    for slot in 0..=breaks.len() {
        if counts[slot] == 0 {
            continue;
        }
        result.push(BucketVolatility {
            bucket: QuantileBucket::ALL[result.len()],
            mean_volatility: sums[slot] / counts[slot] as f64,
            observations: counts[slot],
        });
    }
    result
}
