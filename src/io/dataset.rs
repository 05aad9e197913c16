use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::AnalysisError;
use crate::io::open_maybe_gz;
use crate::model::Dataset;

/// Loads a header-less two-column CSV (reference MIC, test value).
/// `.gz` input is decompressed transparently.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let reader = open_maybe_gz(path)?;
    let reader = BufReader::new(reader);
    let dataset = parse_dataset(reader)
        .with_context(|| format!("failed to load dataset {}", path.display()))?;
    Ok(dataset)
}

/// All-or-nothing: the first bad row rejects the whole input.
pub fn parse_dataset<R: BufRead>(mut reader: R) -> Result<Dataset, AnalysisError> {
    let mut mics = Vec::new();
    let mut alt_values = Vec::new();

    let mut line = String::new();
    let mut line_no = 0usize;
    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| AnalysisError::InvalidDataset(format!("read error: {}", e)))?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let fields: Vec<&str> = trimmed.split(',').collect();
        if fields.len() != 2 {
            return Err(AnalysisError::InvalidDataset(format!(
                "line {} has {} columns (expected 2: MIC, test value)",
                line_no,
                fields.len()
            )));
        }
        mics.push(parse_field(fields[0], line_no, 1)?);
        alt_values.push(parse_field(fields[1], line_no, 2)?);
    }

    if mics.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }
    Dataset::from_columns(&mics, &alt_values)
}

fn parse_field(raw: &str, line_no: usize, column: usize) -> Result<f64, AnalysisError> {
    let field = raw.trim();
    field.parse::<f64>().map_err(|_| {
        AnalysisError::InvalidDataset(format!(
            "line {} column {} is not numeric ('{}')",
            line_no, column, field
        ))
    })
}
