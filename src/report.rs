use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::constants::report::{
    ATTRIBUTION_LINE, BANNER_WIDTH, CATEGORICAL_HEADER, CONSOLE_TITLE, NOT_AVAILABLE,
    NUMERIC_HEADER, REPORT_TITLE, SECTION_RULE_WIDTH,
};
use crate::data::Statistics;
use crate::metrics::format_count_with_commas;
use crate::types::Category;

/// Render the persisted report body.
///
/// Fixed layout: title banner, the numeric block when numeric statistics
/// exist, the categorical block when categorical statistics exist, and a
/// closing banner with the attribution line. Categories render in sorted
/// order.
pub fn render_report(statistics: &Statistics, unique_categories: &BTreeSet<Category>) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let rule = "-".repeat(SECTION_RULE_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "{REPORT_TITLE}");
    let _ = writeln!(out, "{banner}");
    let _ = writeln!(out);
    if let Some(numeric) = &statistics.numeric {
        let _ = writeln!(out, "{NUMERIC_HEADER}");
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(
            out,
            "Total Data Points: {}",
            format_count_with_commas(numeric.count)
        );
        let _ = writeln!(out, "Sum: {:.2}", numeric.total);
        let _ = writeln!(out, "Average: {:.2}", numeric.average);
        let _ = writeln!(out, "Minimum: {:.2}", numeric.minimum);
        let _ = writeln!(out, "Maximum: {:.2}", numeric.maximum);
        let _ = writeln!(out, "Performance: {}", numeric.performance);
        let _ = writeln!(out);
    }
    if let Some(categorical) = &statistics.categorical {
        let _ = writeln!(out, "{CATEGORICAL_HEADER}");
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "Unique Categories: {}", categorical.unique_count);
        if !unique_categories.is_empty() {
            let _ = writeln!(out, "List of Unique Categories:");
            for category in unique_categories {
                let _ = writeln!(out, "  - {category}");
            }
        }
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "{banner}");
    let _ = writeln!(out, "{ATTRIBUTION_LINE}");
    out
}

/// Render the console view of the results.
///
/// Mirrors the persisted report with decorative banners and bullets; blocks
/// follow the loaded data, and fields that were not computed render as
/// `N/A` instead of erroring. Not a stable contract.
pub fn render_console(
    statistics: &Statistics,
    unique_categories: &BTreeSet<Category>,
    numerical_count: usize,
    categorical_count: usize,
) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "{banner}");
    let _ = writeln!(out, "{CONSOLE_TITLE}");
    let _ = writeln!(out, "{banner}");
    if numerical_count > 0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "{NUMERIC_HEADER}");
        match &statistics.numeric {
            Some(numeric) => {
                let _ = writeln!(
                    out,
                    "  \u{2022} Data Points: {}",
                    format_count_with_commas(numeric.count)
                );
                let _ = writeln!(out, "  \u{2022} Sum: {:.2}", numeric.total);
                let _ = writeln!(out, "  \u{2022} Average: {:.2}", numeric.average);
                let _ = writeln!(out, "  \u{2022} Minimum: {:.2}", numeric.minimum);
                let _ = writeln!(out, "  \u{2022} Maximum: {:.2}", numeric.maximum);
                let _ = writeln!(out, "  \u{2022} Performance: {}", numeric.performance);
            }
            None => {
                let _ = writeln!(
                    out,
                    "  \u{2022} Data Points: {}",
                    format_count_with_commas(numerical_count)
                );
                let _ = writeln!(out, "  \u{2022} Statistics: {NOT_AVAILABLE}");
            }
        }
    }
    if categorical_count > 0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "{CATEGORICAL_HEADER}");
        let _ = writeln!(out, "  \u{2022} Total Categories: {categorical_count}");
        match &statistics.categorical {
            Some(categorical) => {
                let _ = writeln!(
                    out,
                    "  \u{2022} Unique Categories: {}",
                    categorical.unique_count
                );
            }
            None => {
                let _ = writeln!(out, "  \u{2022} Unique Categories: {NOT_AVAILABLE}");
            }
        }
        if !unique_categories.is_empty() {
            let values: Vec<&str> = unique_categories
                .iter()
                .map(String::as_str)
                .collect();
            let _ = writeln!(out, "  \u{2022} Unique Values: {}", values.join(", "));
        }
    }
    let _ = writeln!(out);
    let _ = write!(out, "{banner}");
    out
}

/// Write the rendered report to `path`, returning whether the write
/// succeeded.
///
/// Write failures are logged and swallowed into the boolean result; this
/// call never propagates an error.
pub fn save_report(
    statistics: &Statistics,
    unique_categories: &BTreeSet<Category>,
    path: &Path,
) -> bool {
    let contents = render_report(statistics, unique_categories);
    match fs::write(path, contents) {
        Ok(()) => {
            info!(path = %path.display(), "analysis report saved");
            true
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to save analysis report");
            false
        }
    }
}

#[derive(Serialize)]
struct ReportPayload<'a> {
    statistics: &'a Statistics,
    unique_categories: &'a BTreeSet<Category>,
}

/// Render the results as pretty JSON for machine consumption.
///
/// The category array is sorted because the backing set iterates in order.
pub fn render_json(
    statistics: &Statistics,
    unique_categories: &BTreeSet<Category>,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ReportPayload {
        statistics,
        unique_categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CategorySummary, NumericSummary, PerformanceLabel};
    use tempfile::tempdir;

    fn sample_statistics() -> (Statistics, BTreeSet<Category>) {
        let statistics = Statistics {
            numeric: Some(NumericSummary {
                count: 20,
                total: 1633.0,
                average: 81.65,
                minimum: 65.0,
                maximum: 95.0,
                performance: PerformanceLabel::HighPerformance,
            }),
            categorical: Some(CategorySummary { unique_count: 3 }),
        };
        let unique: BTreeSet<Category> = ["Physics", "Biology", "Mathematics"]
            .iter()
            .map(|name| name.to_string())
            .collect();
        (statistics, unique)
    }

    #[test]
    fn report_contains_both_blocks_and_attribution() {
        let (statistics, unique) = sample_statistics();
        let report = render_report(&statistics, &unique);

        assert!(report.starts_with("DATASET ANALYSIS REPORT\n"));
        assert!(report.contains("NUMERICAL DATA STATISTICS:"));
        assert!(report.contains("Total Data Points: 20"));
        assert!(report.contains("Sum: 1633.00"));
        assert!(report.contains("Average: 81.65"));
        assert!(report.contains("Performance: High Performance"));
        assert!(report.contains("CATEGORICAL DATA ANALYSIS:"));
        assert!(report.contains("Unique Categories: 3"));
        assert!(report.ends_with("Report generated by Dataset Management System\n"));
    }

    #[test]
    fn report_lists_categories_in_sorted_order() {
        let (statistics, unique) = sample_statistics();
        let report = render_report(&statistics, &unique);

        let biology = report.find("  - Biology").unwrap();
        let mathematics = report.find("  - Mathematics").unwrap();
        let physics = report.find("  - Physics").unwrap();
        assert!(biology < mathematics && mathematics < physics);
    }

    #[test]
    fn report_omits_absent_blocks() {
        let (mut statistics, unique) = sample_statistics();
        statistics.numeric = None;
        let report = render_report(&statistics, &unique);
        assert!(!report.contains("NUMERICAL DATA STATISTICS:"));
        assert!(report.contains("CATEGORICAL DATA ANALYSIS:"));

        let (mut statistics, _) = sample_statistics();
        statistics.categorical = None;
        let report = render_report(&statistics, &BTreeSet::new());
        assert!(report.contains("NUMERICAL DATA STATISTICS:"));
        assert!(!report.contains("CATEGORICAL DATA ANALYSIS:"));
        assert!(report.contains("Report generated by Dataset Management System"));
    }

    #[test]
    fn large_counts_render_with_commas() {
        let (mut statistics, unique) = sample_statistics();
        statistics.numeric.as_mut().unwrap().count = 1_000_000;
        let report = render_report(&statistics, &unique);
        assert!(report.contains("Total Data Points: 1,000,000"));
    }

    #[test]
    fn save_report_returns_false_on_unwritable_path() {
        let temp = tempdir().unwrap();
        let (statistics, unique) = sample_statistics();
        let before = statistics.clone();

        // A directory path cannot be written as a file.
        let saved = save_report(&statistics, &unique, temp.path());
        assert!(!saved);
        assert_eq!(statistics, before);
    }

    #[test]
    fn save_report_writes_the_rendered_contents() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("report.txt");
        let (statistics, unique) = sample_statistics();

        assert!(save_report(&statistics, &unique, &path));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_report(&statistics, &unique));
    }

    #[test]
    fn console_renders_placeholders_before_statistics_exist() {
        let rendered = render_console(&Statistics::default(), &BTreeSet::new(), 4, 2);
        assert!(rendered.contains("Statistics: N/A"));
        assert!(rendered.contains("Total Categories: 2"));
        assert!(rendered.contains("Unique Categories: N/A"));
    }

    #[test]
    fn json_rendering_uses_display_labels_and_sorted_values() {
        let (statistics, unique) = sample_statistics();
        let json = render_json(&statistics, &unique).unwrap();
        assert!(json.contains("\"High Performance\""));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let values: Vec<&str> = parsed["unique_categories"]
            .as_array()
            .unwrap()
            .iter()
            .map(|value| value.as_str().unwrap())
            .collect();
        assert_eq!(values, vec!["Biology", "Mathematics", "Physics"]);
    }
}
