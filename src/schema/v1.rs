use serde::{Deserialize, Serialize};

/// Which comparison the x column represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Disk,
    MicVsMic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataKind {
    Disk,
    Mic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutoffOrigin {
    Fitted,
    Manual,
    MicVsMic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub samples: u64,
    pub mode: Mode,
    pub data_kind: Option<DataKind>,
    pub strain_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XCutoffs {
    pub susceptible: f64,
    pub resistant: f64,
    pub annotation: String,
    pub origin: CutoffOrigin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MicBreakpoints {
    pub susceptible: f64,
    pub resistant: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cutoffs {
    pub x: XCutoffs,
    pub y: MicBreakpoints,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitSummary {
    pub tie_widths: Vec<u32>,
    pub notice: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorCounts {
    pub num_strains: u64,
    pub very_major: u64,
    pub major: u64,
    pub minor: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBands {
    #[serde(rename = ">=I+2")]
    pub i_plus2: ErrorCounts,
    #[serde(rename = "I+1 to I-1")]
    pub i_plus1_minus1: ErrorCounts,
    #[serde(rename = "<=I-2")]
    pub i_minus2: ErrorCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agreement {
    pub essential: f64,
    pub categorical: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Errors {
    pub total: ErrorCounts,
    pub bands: ErrorBands,
    /// Rows are actual category, columns predicted, both ordered R, I, S.
    pub confusion_matrix: [[u64; 3]; 3],
    pub agreement: Option<Agreement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plot {
    pub x_edges: Vec<f64>,
    pub y_edges: Vec<f64>,
    pub x_log: bool,
    pub counts: Vec<Vec<u64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskfitReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub cutoffs: Option<Cutoffs>,
    pub fit: Option<FitSummary>,
    pub errors: Option<Errors>,
    pub plot: Option<Plot>,
}

impl DiskfitReportV1 {
    pub fn empty(tool_version: &str, mode: Mode, strain_name: &str) -> Self {
        Self {
            tool: "diskfit".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input_meta: InputMeta {
                samples: 0,
                mode,
                data_kind: None,
                strain_name: strain_name.to_string(),
            },
            cutoffs: None,
            fit: None,
            errors: None,
            plot: None,
        }
    }
}
