pub mod bins;
pub mod classify;
pub mod detect;
pub mod fit;
pub mod taxonomy;

use crate::error::AnalysisError;

/// Susceptibility category. The encoding is fixed for every mode; the
/// comparison direction is what changes between modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Resistant = 0,
    Intermediate = 1,
    Susceptible = 2,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Resistant,
        Category::Intermediate,
        Category::Susceptible,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Resistant => "resistant",
            Self::Intermediate => "intermediate",
            Self::Susceptible => "susceptible",
        }
    }
}

/// One isolate: `x` is the test value (disk zone or alternate MIC), `y` the
/// reference MIC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    /// Builds a dataset from the reference MIC column and the test column.
    /// Rejects unequal lengths and any negative or non-finite value.
    pub fn from_columns(mics: &[f64], alt_values: &[f64]) -> Result<Self, AnalysisError> {
        if mics.len() != alt_values.len() {
            return Err(AnalysisError::InvalidDataset(format!(
                "column lengths differ ({} MIC values, {} test values)",
                mics.len(),
                alt_values.len()
            )));
        }
        let mut samples = Vec::with_capacity(mics.len());
        for (i, (&y, &x)) in mics.iter().zip(alt_values).enumerate() {
            check_value(y, i + 1, 1)?;
            check_value(x, i + 1, 2)?;
            samples.push(Sample { x, y });
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn x_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.x).collect()
    }

    pub fn y_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.y).collect()
    }
}

fn check_value(value: f64, row: usize, column: usize) -> Result<(), AnalysisError> {
    if !value.is_finite() {
        return Err(AnalysisError::InvalidDataset(format!(
            "row {} column {} is not a finite number",
            row, column
        )));
    }
    if value < 0.0 {
        return Err(AnalysisError::InvalidDataset(format!(
            "row {} column {} is negative ({})",
            row, column, value
        )));
    }
    Ok(())
}

/// Susceptible / resistant thresholds on the x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutoffPair {
    pub s: f64,
    pub r: f64,
}

/// Reference MIC breakpoints on the y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MicCutoffPair {
    pub s: f64,
    pub r: f64,
}
