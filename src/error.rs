use std::fmt;

use thiserror::Error;

/// User-facing failure of a core operation. The `Display` text is the
/// message shown to the user; session state is never modified when one
/// of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("the {field} you have entered ('{text}') is not a valid number")]
    NonNumericCutoff { field: &'static str, text: String },

    #[error("the {field} of {value} is outside the accepted range ({min} to {max})")]
    CutoffOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("the {field} of {value} is negative")]
    NegativeCutoff { field: &'static str, value: f64 },

    #[error("the data could not be processed: {0}")]
    InvalidDataset(String),

    #[error("the dataset contains no samples")]
    EmptyDataset,

    #[error("no dataset has been loaded")]
    NoDataset,

    #[error(
        "the dataset does not contain both resistant and susceptible strains \
         (found {found}); autofitting cannot place two cutoffs from one class. \
         Use manual cutoffs for this dataset instead"
    )]
    Degenerate { found: String },

    #[error(
        "the test values span {span}, wider than the {limit} the cutoff search accepts; \
         check the dataset for mistyped values"
    )]
    SearchSpanTooWide { span: f64, limit: f64 },
}

/// Informational result of a fit: more than one window width reached the
/// best score. Not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TieNotice {
    pub widths: Vec<u32>,
}

impl fmt::Display for TieNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<String> = self.widths.iter().map(|w| w.to_string()).collect();
        write!(
            f,
            "it was possible to fit the data using intermediate window widths of {}; \
             the smallest window width has been used",
            widths.join(", ")
        )
    }
}
