use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::constants::ingestion::TABULAR_EXTENSION;
use crate::errors::AnalysisError;
use crate::types::{Category, RawToken};

/// Read raw numeric tokens from a flat file.
///
/// A path with the recognized tabular extension is parsed as
/// comma-separated rows and flattened in row-major order; any other
/// extension is read as one token per line. Blank rows, cells, and lines
/// are skipped and every token is trimmed.
pub fn read_numerical_data(path: &Path) -> Result<Vec<RawToken>, AnalysisError> {
    let file = open_input(path)?;
    let tokens = if is_tabular_file(path) {
        read_tabular_tokens(path, file)?
    } else {
        read_line_tokens(file)?
    };
    debug!(path = %path.display(), token_count = tokens.len(), "read numeric tokens");
    Ok(tokens)
}

/// Read category labels from a flat file, one per non-blank trimmed line.
pub fn read_categorical_data(path: &Path) -> Result<Vec<Category>, AnalysisError> {
    let file = open_input(path)?;
    let categories = read_line_tokens(file)?;
    debug!(path = %path.display(), category_count = categories.len(), "read categories");
    Ok(categories)
}

/// True if the path has the tabular extension (case-insensitive).
pub fn is_tabular_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(TABULAR_EXTENSION))
        .unwrap_or(false)
}

fn open_input(path: &Path) -> Result<File, AnalysisError> {
    File::open(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            AnalysisError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            AnalysisError::Io(err)
        }
    })
}

fn read_tabular_tokens(path: &Path, file: File) -> Result<Vec<RawToken>, AnalysisError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);
    let mut tokens = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| AnalysisError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        for cell in record.iter() {
            let token = cell.trim();
            if !token.is_empty() {
                tokens.push(token.to_string());
            }
        }
    }
    Ok(tokens)
}

fn read_line_tokens(file: File) -> Result<Vec<RawToken>, AnalysisError> {
    let mut tokens = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let token = line.trim();
        if !token.is_empty() {
            tokens.push(token.to_string());
        }
    }
    Ok(tokens)
}
