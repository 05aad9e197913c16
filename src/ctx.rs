use std::path::PathBuf;

use crate::config::{AnalysisDefaults, CutoffTexts, SanityLimits};
use crate::error::TieNotice;
use crate::model::bins::PlotData;
use crate::schema::v1::{DiskfitReportV1, Mode};
use crate::state::AnalysisState;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub csv_path: PathBuf,
}

/// Per-run context threaded through the pipeline stages. The analysis
/// itself lives in `state` and is replaced wholesale by each stage.
#[derive(Debug)]
pub struct Ctx {
    pub input: PathBuf,
    pub texts: CutoffTexts,
    pub limits: SanityLimits,
    pub write_json: bool,
    pub write_csv: bool,
    pub state: AnalysisState,
    pub notice: Option<TieNotice>,
    pub plot: Option<PlotData>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
    pub report: DiskfitReportV1,
}

impl Ctx {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        input: PathBuf,
        out_dir: PathBuf,
        texts: CutoffTexts,
        mode: Mode,
        use_manual_cutoffs: bool,
        strain_name: Option<String>,
        write_json: bool,
        write_csv: bool,
        tool_version: &str,
    ) -> Self {
        let defaults = AnalysisDefaults::default_v1();
        let mut state = AnalysisState::new(&defaults)
            .with_mode(mode)
            .with_manual_cutoffs(use_manual_cutoffs);
        if let Some(name) = strain_name {
            state = state.with_strain_name(&name);
        }
        let json_path = out_dir.join("diskfit.json");
        let csv_path = out_dir.join("diskfit.csv");
        let report = DiskfitReportV1::empty(tool_version, mode, state.strain_name());
        Self {
            input,
            texts,
            limits: SanityLimits::default_v1(),
            write_json,
            write_csv,
            state,
            notice: None,
            plot: None,
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                json_path,
                csv_path,
            },
            report,
        }
    }
}
