//! Immutable analysis session.
//!
//! Every edit returns a new state. Anything that can change the error
//! tables (data, cutoffs, mode) drops the cached tables, so a reader can
//! never see tables computed from older inputs.

use crate::config::{AnalysisDefaults, CutoffField, parse_cutoff_live};
use crate::error::AnalysisError;
use crate::model::fit::FitOutcome;
use crate::model::taxonomy::{ErrorTables, update_error_tables};
use crate::model::{CutoffPair, Dataset, MicCutoffPair};
use crate::schema::v1::{CutoffOrigin, DataKind, Mode};

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisState {
    dataset: Option<Dataset>,
    mode: Mode,
    use_manual_cutoffs: bool,
    strain_name: String,
    mic_cutoffs: MicCutoffPair,
    x_cutoffs: CutoffPair,
    origin: CutoffOrigin,
    data_kind: Option<DataKind>,
    tables: Option<ErrorTables>,
}

impl AnalysisState {
    pub fn new(defaults: &AnalysisDefaults) -> Self {
        Self {
            dataset: None,
            mode: defaults.mode,
            use_manual_cutoffs: defaults.use_manual_cutoffs,
            strain_name: defaults.strain_name.clone(),
            mic_cutoffs: MicCutoffPair {
                s: defaults.mic_cutoff_s,
                r: defaults.mic_cutoff_r,
            },
            x_cutoffs: CutoffPair {
                s: defaults.x_cutoff_s,
                r: defaults.x_cutoff_r,
            },
            origin: CutoffOrigin::Manual,
            data_kind: None,
            tables: None,
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn use_manual_cutoffs(&self) -> bool {
        self.use_manual_cutoffs
    }

    pub fn strain_name(&self) -> &str {
        &self.strain_name
    }

    pub fn mic_cutoffs(&self) -> MicCutoffPair {
        self.mic_cutoffs
    }

    pub fn x_cutoffs(&self) -> CutoffPair {
        self.x_cutoffs
    }

    pub fn origin(&self) -> CutoffOrigin {
        self.origin
    }

    pub fn data_kind(&self) -> Option<DataKind> {
        self.data_kind
    }

    pub fn error_tables(&self) -> Option<&ErrorTables> {
        self.tables.as_ref()
    }

    pub fn with_dataset(&self, dataset: Dataset) -> Self {
        Self {
            dataset: Some(dataset),
            data_kind: None,
            tables: None,
            ..self.clone()
        }
    }

    pub fn with_mode(&self, mode: Mode) -> Self {
        Self {
            mode,
            tables: None,
            ..self.clone()
        }
    }

    pub fn with_manual_cutoffs(&self, use_manual_cutoffs: bool) -> Self {
        Self {
            use_manual_cutoffs,
            ..self.clone()
        }
    }

    pub fn with_strain_name(&self, name: &str) -> Self {
        Self {
            strain_name: name.to_string(),
            ..self.clone()
        }
    }

    /// Live-edit path: text that does not parse leaves the state as is.
    pub fn with_live_edit(&self, field: CutoffField, text: &str) -> Self {
        let Some(value) = parse_cutoff_live(text) else {
            return self.clone();
        };
        let mut next = Self {
            tables: None,
            ..self.clone()
        };
        match field {
            CutoffField::MicSusceptible => next.mic_cutoffs.s = value,
            CutoffField::MicResistant => next.mic_cutoffs.r = value,
            CutoffField::XSusceptible => {
                next.x_cutoffs.s = value;
                next.origin = CutoffOrigin::Manual;
            }
            CutoffField::XResistant => {
                next.x_cutoffs.r = value;
                next.origin = CutoffOrigin::Manual;
            }
        }
        next
    }

    pub fn with_fit(&self, outcome: &FitOutcome) -> Self {
        Self {
            mic_cutoffs: outcome.mic_cutoffs,
            x_cutoffs: outcome.x_cutoffs,
            origin: outcome.origin,
            data_kind: Some(outcome.data_kind),
            tables: None,
            ..self.clone()
        }
    }

    /// Recomputes the error tables from the current dataset and cutoffs.
    pub fn refresh_error_tables(&self) -> Result<Self, AnalysisError> {
        let dataset = self.dataset.as_ref().ok_or(AnalysisError::NoDataset)?;
        let tables = update_error_tables(dataset, self.x_cutoffs, self.mic_cutoffs, self.mode)?;
        Ok(Self {
            tables: Some(tables),
            ..self.clone()
        })
    }
}
