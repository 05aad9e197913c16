use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;

use crate::schema::v1::DiskfitReportV1;

pub mod dataset;
pub mod export;
pub mod json_writer;
pub mod summary;
pub mod table;

pub fn write_json(path: &Path, report: &DiskfitReportV1) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

pub(crate) fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let decoder = GzDecoder::new(file);
        Ok(Box::new(decoder))
    } else {
        Ok(Box::new(file))
    }
}

/// Shortest decimal rendering of a value: `32` rather than `32.0`.
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}

/// Rounds to two decimals for percentage cells.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
