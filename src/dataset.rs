use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::{error, info};

use crate::data::{CategorySummary, Statistics};
use crate::errors::AnalysisError;
use crate::ingestion::{read_categorical_data, read_numerical_data};
use crate::metrics::{numeric_summary, unique_categories};
use crate::report::render_console;
use crate::types::Category;
use crate::validate::validate_numerical_data;

/// Aggregate root owning file paths, loaded datasets, and statistics.
///
/// Lifecycle: construct with optional source paths, `load` to populate the
/// datasets, `calculate_statistics` to fill in the `Statistics`, then
/// display or save the results. Load failures propagate after logging and
/// leave whatever loaded before the failure in place.
pub struct Dataset {
    numerical_path: Option<PathBuf>,
    categorical_path: Option<PathBuf>,
    numerical_data: Vec<f64>,
    categorical_data: Vec<Category>,
    unique_categories: BTreeSet<Category>,
    statistics: Statistics,
}

impl Dataset {
    /// Create an empty dataset with optional numeric/categorical sources.
    pub fn new(numerical_path: Option<PathBuf>, categorical_path: Option<PathBuf>) -> Self {
        Self {
            numerical_path,
            categorical_path,
            numerical_data: Vec::new(),
            categorical_data: Vec::new(),
            unique_categories: BTreeSet::new(),
            statistics: Statistics::default(),
        }
    }

    /// Load and validate data from every configured source path.
    ///
    /// The numeric source is read and validated first, then the categorical
    /// source. The first failure is logged and returned unchanged; data
    /// loaded before the failure is retained.
    pub fn load(&mut self) -> Result<(), AnalysisError> {
        if let Some(path) = &self.numerical_path {
            let loaded = read_numerical_data(path)
                .and_then(|tokens| validate_numerical_data(&tokens));
            match loaded {
                Ok(validated) => {
                    info!(
                        path = %path.display(),
                        record_count = validated.len(),
                        "loaded numerical records"
                    );
                    self.numerical_data = validated;
                }
                Err(err) => {
                    error!(path = %path.display(), %err, "failed to load numerical data");
                    return Err(err);
                }
            }
        }
        if let Some(path) = &self.categorical_path {
            match read_categorical_data(path) {
                Ok(categories) => {
                    info!(
                        path = %path.display(),
                        category_count = categories.len(),
                        "loaded categorical records"
                    );
                    self.categorical_data = categories;
                }
                Err(err) => {
                    error!(path = %path.display(), %err, "failed to load categorical data");
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Compute statistics from the currently loaded datasets.
    ///
    /// The numeric and categorical blocks are independent; each is computed
    /// only when its dataset is non-empty, so calling this before `load`
    /// (or with partial data) yields an empty or partial `Statistics`.
    pub fn calculate_statistics(&mut self, threshold: f64) {
        self.statistics.numeric = numeric_summary(&self.numerical_data, threshold);
        if self.categorical_data.is_empty() {
            self.unique_categories.clear();
            self.statistics.categorical = None;
        } else {
            let (unique, count) = unique_categories(&self.categorical_data);
            self.unique_categories = unique;
            self.statistics.categorical = Some(CategorySummary {
                unique_count: count,
            });
        }
    }

    /// Print the current results to the console.
    pub fn display_results(&self) {
        println!(
            "{}",
            render_console(
                &self.statistics,
                &self.unique_categories,
                self.numerical_data.len(),
                self.categorical_data.len(),
            )
        );
    }

    /// Validated numeric records in load order.
    pub fn numerical_data(&self) -> &[f64] {
        &self.numerical_data
    }

    /// Categorical records in load order.
    pub fn categorical_data(&self) -> &[Category] {
        &self.categorical_data
    }

    /// Distinct categories from the last `calculate_statistics` call.
    pub fn unique_categories(&self) -> &BTreeSet<Category> {
        &self.unique_categories
    }

    /// Statistics from the last `calculate_statistics` call.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}
