use std::fmt;

use serde::{Serialize, Serializer};

use crate::constants::classify;

/// Computed results for one analysis pass.
///
/// Each block is present only when the corresponding dataset was non-empty
/// when `calculate_statistics` ran; `None` means "not computed", never a
/// defaulted zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Statistics {
    /// Numeric summary, absent for a categorical-only run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericSummary>,
    /// Categorical summary, absent for a numeric-only run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorical: Option<CategorySummary>,
}

impl Statistics {
    /// True when neither block has been computed.
    pub fn is_empty(&self) -> bool {
        self.numeric.is_none() && self.categorical.is_none()
    }
}

/// Summary statistics over a non-empty numeric dataset.
///
/// Built only from non-empty input, so `minimum`/`maximum` are plain values
/// here; emptiness is represented by the absence of the whole summary.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NumericSummary {
    /// Number of validated records.
    pub count: usize,
    /// Arithmetic sum of all records.
    pub total: f64,
    /// `total / count`.
    pub average: f64,
    /// Smallest record.
    pub minimum: f64,
    /// Largest record.
    pub maximum: f64,
    /// Threshold classification of the average.
    pub performance: PerformanceLabel,
}

/// Summary of the categorical dataset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategorySummary {
    /// Number of distinct category labels.
    pub unique_count: usize,
}

/// Two-valued classification of an average against a threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerformanceLabel {
    /// Average met or exceeded the threshold.
    HighPerformance,
    /// Average fell below the threshold.
    NeedsImprovement,
}

impl PerformanceLabel {
    /// Canonical display text for this label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PerformanceLabel::HighPerformance => classify::LABEL_HIGH_PERFORMANCE,
            PerformanceLabel::NeedsImprovement => classify::LABEL_NEEDS_IMPROVEMENT,
        }
    }
}

impl fmt::Display for PerformanceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PerformanceLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
