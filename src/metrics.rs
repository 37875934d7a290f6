use std::collections::BTreeSet;

use crate::data::{NumericSummary, PerformanceLabel};
use crate::types::Category;

/// Arithmetic sum of all values, 0 for empty input.
pub fn total(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Mean of all values, defined as 0 for empty input.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    total(values) / values.len() as f64
}

/// Smallest value, or `None` for empty input.
pub fn minimum(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Largest value, or `None` for empty input.
pub fn maximum(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Classify an average against a threshold (inclusive on the high side).
pub fn evaluate_performance(average: f64, threshold: f64) -> PerformanceLabel {
    if average >= threshold {
        PerformanceLabel::HighPerformance
    } else {
        PerformanceLabel::NeedsImprovement
    }
}

/// Deduplicate categories into a sorted set, returning it with its size.
pub fn unique_categories(categories: &[Category]) -> (BTreeSet<Category>, usize) {
    let unique: BTreeSet<Category> = categories.iter().cloned().collect();
    let count = unique.len();
    (unique, count)
}

/// Assemble the full numeric summary, or `None` for empty input.
pub fn numeric_summary(values: &[f64], threshold: f64) -> Option<NumericSummary> {
    let minimum = minimum(values)?;
    let maximum = maximum(values)?;
    let average = average(values);
    Some(NumericSummary {
        count: values.len(),
        total: total(values),
        average,
        minimum,
        maximum,
        performance: evaluate_performance(average, threshold),
    })
}

/// Group a count's digits with commas (e.g. `12345` -> `12,345`).
pub fn format_count_with_commas(value: usize) -> String {
    let raw = value.to_string();
    let mut grouped_reversed = String::with_capacity(raw.len() + (raw.len() / 3));
    for (idx, ch) in raw.chars().rev().enumerate() {
        if idx > 0 && idx % 3 == 0 {
            grouped_reversed.push(',');
        }
        grouped_reversed.push(ch);
    }
    grouped_reversed.chars().rev().collect()
}
