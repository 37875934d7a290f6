use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::RawToken;

/// Error type for ingestion, validation, and report persistence failures.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("input file '{}' not found", .path.display())]
    NotFound { path: PathBuf },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to parse tabular data from '{}': {source}", .path.display())]
    Csv { path: PathBuf, source: csv::Error },
    #[error("no values to validate: input is empty")]
    EmptyInput,
    #[error("invalid non-numeric value '{value}' at position {position}")]
    InvalidValue { value: RawToken, position: usize },
}
