//! Best-effort guess of whether the test column holds disk zones or MICs.
//!
//! Disk zones sit roughly in [5, 50] mm and are usually integers, while
//! MICs are nearly always reported on a fixed doubling series. The result
//! is a heuristic; callers may override it.

use crate::error::AnalysisError;
use crate::model::bins::STANDARD_MIC_VALUES;
use crate::schema::v1::DataKind;

const MIC_MIN_BELOW: f64 = 0.12;
const MIC_MAX_ABOVE: f64 = 60.0;
const MIC_MEMBERSHIP_FRACTION: f64 = 0.9;

pub fn detect(x: &[f64]) -> Result<DataKind, AnalysisError> {
    if x.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(AnalysisError::InvalidDataset(
            "column 2 contains non-numeric values".to_string(),
        ));
    }
    let min = x.iter().copied().fold(f64::INFINITY, f64::min);
    let max = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min < 0.0 {
        return Err(AnalysisError::InvalidDataset(
            "column 2 contains negative values".to_string(),
        ));
    }
    if min < MIC_MIN_BELOW || max > MIC_MAX_ABOVE {
        return Ok(DataKind::Mic);
    }

    let matches = x
        .iter()
        .filter(|v| STANDARD_MIC_VALUES.contains(v))
        .count();
    if matches as f64 >= MIC_MEMBERSHIP_FRACTION * x.len() as f64 {
        Ok(DataKind::Mic)
    } else {
        Ok(DataKind::Disk)
    }
}
