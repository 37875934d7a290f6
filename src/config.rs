use std::path::PathBuf;

use crate::constants::{classify, report};

/// Run configuration for a single analysis pass.
///
/// The defaults here are the library-wide ones; the CLI runner overrides
/// the report path with its own default output name.
#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    /// Average at or above this value classifies as high performance.
    ///
    /// No range validation is applied; negative or >100 thresholds are
    /// accepted as-is.
    pub threshold: f64,
    /// Destination path for the persisted text report.
    pub report_path: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threshold: classify::DEFAULT_THRESHOLD,
            report_path: PathBuf::from(report::DEFAULT_REPORT_FILENAME),
        }
    }
}
