//! Sentiment classification and polarity/intensity breakdown.
//!
//! Two related labelings are used: the plain sign-based class (any positive
//! score is `Positive`) for the distribution pie, and a dead-zone polarity
//! (scores within `±dead_zone` count as `Neutral`) for the cross-tabulation
//! against intensity bands.

use coinpulse_data::SentimentRecord;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Dead zone used for the polarity/intensity breakdown in the reference
/// analysis.
pub const DEAD_ZONE: f64 = 0.2;

/// Sign-based sentiment class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum SentimentClass {
    /// Score below zero (or below the dead zone for polarity).
    #[display("negative")]
    Negative,

    /// Score of exactly zero (or within the dead zone for polarity).
    #[display("neutral")]
    Neutral,

    /// Score above zero (or above the dead zone for polarity).
    #[display("positive")]
    Positive,
}

impl SentimentClass {
    /// All classes in display order (negative, neutral, positive).
    pub const ALL: [Self; 3] = [Self::Negative, Self::Neutral, Self::Positive];

    const fn index(self) -> usize {
        match self {
            Self::Negative => 0,
            Self::Neutral => 1,
            Self::Positive => 2,
        }
    }
}

/// Classify a score by sign.
pub fn classify(score: f64) -> SentimentClass {
    if score > 0.0 {
        SentimentClass::Positive
    } else if score < 0.0 {
        SentimentClass::Negative
    } else {
        SentimentClass::Neutral
    }
}

/// Classify a score with a neutral dead zone around zero.
pub fn polarity(score: f64, dead_zone: f64) -> SentimentClass {
    if score > dead_zone {
        SentimentClass::Positive
    } else if score < -dead_zone {
        SentimentClass::Negative
    } else {
        SentimentClass::Neutral
    }
}

/// Intensity band over the absolute sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum IntensityBand {
    /// |score| in [0, 0.2).
    #[display("low")]
    Low,

    /// |score| in [0.2, 0.6).
    #[display("medium")]
    Medium,

    /// |score| in [0.6, inf).
    #[display("high")]
    High,
}

impl IntensityBand {
    /// All bands in ascending order.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Band for an absolute score.
    pub fn of(intensity: f64) -> Self {
        if intensity < 0.2 {
            Self::Low
        } else if intensity < 0.6 {
            Self::Medium
        } else {
            Self::High
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }
}

/// Counts and percentages of sign-based classes over a record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    /// Number of negative records.
    pub negative: usize,

    /// Number of neutral records.
    pub neutral: usize,

    /// Number of positive records.
    pub positive: usize,
}

impl SentimentDistribution {
    /// Tally the sign-based class of every record.
    pub fn from_records(records: &[SentimentRecord]) -> Self {
        let mut dist = Self {
            negative: 0,
            neutral: 0,
            positive: 0,
        };
        for record in records {
            match classify(record.score) {
                SentimentClass::Negative => dist.negative += 1,
                SentimentClass::Neutral => dist.neutral += 1,
                SentimentClass::Positive => dist.positive += 1,
            }
        }
        dist
    }

    /// Total number of records.
    pub const fn total(&self) -> usize {
        self.negative + self.neutral + self.positive
    }

    /// Count for one class.
    pub const fn count(&self, class: SentimentClass) -> usize {
        match class {
            SentimentClass::Negative => self.negative,
            SentimentClass::Neutral => self.neutral,
            SentimentClass::Positive => self.positive,
        }
    }

    /// Percentage of records in one class, 0 when the set is empty.
    pub fn percentage(&self, class: SentimentClass) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(class) as f64 / total as f64 * 100.0
    }
}

/// Cross-tabulation of intensity band by polarity, as raw counts.
///
/// Rows are intensity bands in ascending order, columns are polarities in
/// negative/neutral/positive order, matching the reference chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolarityIntensityTable {
    counts: [[usize; 3]; 3],
    total: usize,
}

impl PolarityIntensityTable {
    /// Build the table from records, using `dead_zone` for polarity.
    pub fn from_records(records: &[SentimentRecord], dead_zone: f64) -> Self {
        let mut counts = [[0usize; 3]; 3];
        for record in records {
            let band = IntensityBand::of(record.score.abs());
            let class = polarity(record.score, dead_zone);
            counts[band.index()][class.index()] += 1;
        }
        Self {
            counts,
            total: records.len(),
        }
    }

    /// Count for one band/polarity cell.
    pub const fn count(&self, band: IntensityBand, class: SentimentClass) -> usize {
        self.counts[band.index()][class.index()]
    }

    /// Cell share as a percentage of all records, 0 when the set is empty.
    pub fn share_pct(&self, band: IntensityBand, class: SentimentClass) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(band, class) as f64 / self.total as f64 * 100.0
    }

    /// Total number of records tallied.
    pub const fn total(&self) -> usize {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn record(score: f64) -> SentimentRecord {
        SentimentRecord {
            date: NaiveDate::from_ymd_opt(2021, 1, 5).unwrap(),
            score,
            description: None,
        }
    }

    #[rstest]
    #[case(0.7, SentimentClass::Positive)]
    #[case(1e-9, SentimentClass::Positive)]
    #[case(0.0, SentimentClass::Neutral)]
    #[case(-1e-9, SentimentClass::Negative)]
    #[case(-0.4, SentimentClass::Negative)]
    fn test_classify_by_sign(#[case] score: f64, #[case] expected: SentimentClass) {
        assert_eq!(classify(score), expected);
    }

    #[rstest]
    #[case(0.3, SentimentClass::Positive)]
    #[case(0.2, SentimentClass::Neutral)]
    #[case(-0.2, SentimentClass::Neutral)]
    #[case(-0.21, SentimentClass::Negative)]
    fn test_polarity_dead_zone(#[case] score: f64, #[case] expected: SentimentClass) {
        assert_eq!(polarity(score, DEAD_ZONE), expected);
    }

    #[rstest]
    #[case(0.0, IntensityBand::Low)]
    #[case(0.19, IntensityBand::Low)]
    #[case(0.2, IntensityBand::Medium)]
    #[case(0.59, IntensityBand::Medium)]
    #[case(0.6, IntensityBand::High)]
    #[case(1.0, IntensityBand::High)]
    fn test_intensity_bands_left_closed(#[case] intensity: f64, #[case] expected: IntensityBand) {
        assert_eq!(IntensityBand::of(intensity), expected);
    }

    #[test]
    fn test_distribution_percentages() {
        let records: Vec<_> = [0.5, 0.1, -0.3, 0.0].into_iter().map(record).collect();
        let dist = SentimentDistribution::from_records(&records);
        assert_eq!(dist.positive, 2);
        assert_eq!(dist.negative, 1);
        assert_eq!(dist.neutral, 1);
        assert_relative_eq!(dist.percentage(SentimentClass::Positive), 50.0);
    }

    #[test]
    fn test_crosstab_shares_sum_to_hundred() {
        let records: Vec<_> = [0.5, 0.1, -0.3, -0.7, 0.0, 0.25]
            .into_iter()
            .map(record)
            .collect();
        let table = PolarityIntensityTable::from_records(&records, DEAD_ZONE);
        let sum: f64 = IntensityBand::ALL
            .iter()
            .flat_map(|band| {
                SentimentClass::ALL
                    .iter()
                    .map(|class| table.share_pct(*band, *class))
            })
            .sum();
        assert_relative_eq!(sum, 100.0, epsilon = 1e-9);
        // 0.5 is medium/positive, 0.1 is low/neutral under the dead zone
        assert_eq!(table.count(IntensityBand::Medium, SentimentClass::Positive), 2);
        assert_eq!(table.count(IntensityBand::Low, SentimentClass::Neutral), 2);
    }

    #[test]
    fn test_empty_distribution_is_zero() {
        let dist = SentimentDistribution::from_records(&[]);
        assert_eq!(dist.total(), 0);
        assert_relative_eq!(dist.percentage(SentimentClass::Neutral), 0.0);
    }
}
