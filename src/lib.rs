#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// CLI runner shared by the `datasum` binary.
pub mod app;
/// Run configuration types.
pub mod config;
/// Centralized constants used across ingestion, classification, and reporting.
pub mod constants;
/// Computed statistics types.
pub mod data;
/// Dataset orchestrator owning loaded data and statistics.
pub mod dataset;
/// Flat-file readers for numeric and categorical inputs.
pub mod ingestion;
/// Pure aggregation and classification helpers.
pub mod metrics;
/// Report rendering and persistence.
pub mod report;
/// Shared type aliases.
pub mod types;
/// Raw-token validation.
pub mod validate;

mod errors;

pub use config::AnalysisConfig;
pub use data::{CategorySummary, NumericSummary, PerformanceLabel, Statistics};
pub use dataset::Dataset;
pub use errors::AnalysisError;
pub use ingestion::{read_categorical_data, read_numerical_data};
pub use metrics::{
    average, evaluate_performance, maximum, minimum, numeric_summary, total, unique_categories,
};
pub use report::{render_json, render_report, save_report};
pub use types::{Category, RawToken};
pub use validate::validate_numerical_data;
