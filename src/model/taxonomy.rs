//! FDA-style error classes and their aggregation over a dataset.

use crate::config::{CutoffTexts, SanityLimits};
use crate::error::AnalysisError;
use crate::model::classify::{classify_x, classify_y};
use crate::model::{Category, CutoffPair, Dataset, MicCutoffPair};
use crate::schema::v1::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    None,
    Minor,
    Major,
    VeryMajor,
}

/// Very major: resistant called susceptible. Major: susceptible called
/// resistant. Any other disagreement involves intermediate and is minor.
pub fn classify_error(predicted: Category, actual: Category) -> ErrorClass {
    use Category::{Intermediate, Resistant, Susceptible};
    match (actual, predicted) {
        (Resistant, Resistant) | (Intermediate, Intermediate) | (Susceptible, Susceptible) => {
            ErrorClass::None
        }
        (Intermediate, _) | (_, Intermediate) => ErrorClass::Minor,
        (Resistant, Susceptible) => ErrorClass::VeryMajor,
        (Susceptible, Resistant) => ErrorClass::Major,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErrorRecord {
    pub sample_count: u64,
    pub very_major_count: u64,
    pub major_count: u64,
    pub minor_count: u64,
}

impl ErrorRecord {
    fn record(&mut self, class: ErrorClass) {
        self.sample_count += 1;
        match class {
            ErrorClass::None => {}
            ErrorClass::Minor => self.minor_count += 1,
            ErrorClass::Major => self.major_count += 1,
            ErrorClass::VeryMajor => self.very_major_count += 1,
        }
    }

    pub fn error_count(&self) -> u64 {
        self.very_major_count + self.major_count + self.minor_count
    }
}

/// Reference-MIC distance band of a sample relative to the breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    IPlus2,
    IPlus1Minus1,
    IMinus2,
}

pub fn band_for(y: f64, mic: MicCutoffPair) -> Band {
    if y > mic.r {
        Band::IPlus2
    } else if y >= mic.s {
        Band::IPlus1Minus1
    } else {
        Band::IMinus2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BandRecords {
    pub i_plus2: ErrorRecord,
    pub i_plus1_minus1: ErrorRecord,
    pub i_minus2: ErrorRecord,
}

impl BandRecords {
    fn get_mut(&mut self, band: Band) -> &mut ErrorRecord {
        match band {
            Band::IPlus2 => &mut self.i_plus2,
            Band::IPlus1Minus1 => &mut self.i_plus1_minus1,
            Band::IMinus2 => &mut self.i_minus2,
        }
    }
}

/// `cells[actual][predicted]`, both indexed by `Category::index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfusionMatrix {
    pub cells: [[u64; 3]; 3],
}

impl ConfusionMatrix {
    pub fn get(&self, actual: Category, predicted: Category) -> u64 {
        self.cells[actual.index()][predicted.index()]
    }

    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Agreement {
    pub essential: f64,
    pub categorical: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorTables {
    pub overall: ErrorRecord,
    pub bands: BandRecords,
    pub confusion: ConfusionMatrix,
    /// MIC vs MIC mode only.
    pub agreement: Option<Agreement>,
}

/// One pass over the dataset producing fresh error tables.
pub fn update_error_tables(
    dataset: &Dataset,
    cutoffs: CutoffPair,
    mic_cutoffs: MicCutoffPair,
    mode: Mode,
) -> Result<ErrorTables, AnalysisError> {
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let mut overall = ErrorRecord::default();
    let mut bands = BandRecords::default();
    let mut confusion = ConfusionMatrix::default();
    let mut within_twofold = 0u64;
    let mut wrong = 0u64;

    for sample in dataset.samples() {
        let actual = classify_y(sample.y, mic_cutoffs);
        let predicted = classify_x(sample.x, cutoffs, mode);
        confusion.cells[actual.index()][predicted.index()] += 1;

        let class = classify_error(predicted, actual);
        overall.record(class);
        bands.get_mut(band_for(sample.y, mic_cutoffs)).record(class);

        if class != ErrorClass::None {
            wrong += 1;
        }
        if sample.x >= 0.5 * sample.y && sample.x <= 2.0 * sample.y {
            within_twofold += 1;
        }
    }

    let agreement = match mode {
        Mode::MicVsMic => {
            let total = dataset.len() as f64;
            Some(Agreement {
                essential: 100.0 * within_twofold as f64 / total,
                categorical: 100.0 - 100.0 * wrong as f64 / total,
            })
        }
        Mode::Disk => None,
    };

    Ok(ErrorTables {
        overall,
        bands,
        confusion,
        agreement,
    })
}

/// Commit-path variant: cutoff text is parsed strictly first, so a
/// non-numeric entry is reported instead of producing tables.
pub fn update_error_tables_from_text(
    dataset: &Dataset,
    texts: &CutoffTexts,
    limits: &SanityLimits,
    mode: Mode,
) -> Result<ErrorTables, AnalysisError> {
    let mic_cutoffs = texts.parse_mic(limits)?;
    let cutoffs = texts.parse_x()?;
    update_error_tables(dataset, cutoffs, mic_cutoffs, mode)
}
