//! Measurement to category mapping.
//!
//! The two x-axis policies are not mirror images of each other: disk
//! zones grow with susceptibility while MICs shrink.

use crate::model::{Category, CutoffPair, MicCutoffPair};
use crate::schema::v1::Mode;

/// Classifies an x-axis value.
///
/// Disk: `>= S` susceptible, `<= R` resistant.
/// MIC vs MIC: `<= S` susceptible, `>= R` resistant.
pub fn classify(value: f64, cutoff_s: f64, cutoff_r: f64, mode: Mode) -> Category {
    match mode {
        Mode::Disk => {
            if value >= cutoff_s {
                Category::Susceptible
            } else if value <= cutoff_r {
                Category::Resistant
            } else {
                Category::Intermediate
            }
        }
        Mode::MicVsMic => {
            if value <= cutoff_s {
                Category::Susceptible
            } else if value >= cutoff_r {
                Category::Resistant
            } else {
                Category::Intermediate
            }
        }
    }
}

pub fn classify_x(value: f64, cutoffs: CutoffPair, mode: Mode) -> Category {
    classify(value, cutoffs.s, cutoffs.r, mode)
}

/// Reference MIC classification, identical for every mode.
pub fn classify_y(value: f64, cutoffs: MicCutoffPair) -> Category {
    classify(value, cutoffs.s, cutoffs.r, Mode::MicVsMic)
}

pub fn classify_all_y(values: &[f64], cutoffs: MicCutoffPair) -> Vec<Category> {
    values.iter().map(|&v| classify_y(v, cutoffs)).collect()
}
