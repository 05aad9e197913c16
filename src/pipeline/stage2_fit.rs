use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::model::fit::fit;
use crate::pipeline::Stage;
use crate::schema::v1::{DataKind, Mode};

pub struct Stage2Fit;

impl Stage2Fit {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Fit {
    fn name(&self) -> &'static str {
        "stage2_fit"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let dataset = ctx.state.dataset().context("dataset not loaded")?;
        let mode = ctx.state.mode();
        let outcome = fit(
            dataset,
            &ctx.texts,
            mode,
            ctx.state.use_manual_cutoffs(),
            &ctx.limits,
        )?;

        info!(
            data_kind = ?outcome.data_kind,
            origin = ?outcome.origin,
            cutoff_s = outcome.x_cutoffs.s,
            cutoff_r = outcome.x_cutoffs.r,
            "cutoffs_resolved"
        );

        let mismatch = match (mode, outcome.data_kind) {
            (Mode::Disk, DataKind::Mic) => Some("test column looks like MIC values but mode is disk"),
            (Mode::MicVsMic, DataKind::Disk) => {
                Some("test column looks like disk zones but mode is mic-vs-mic")
            }
            _ => None,
        };
        if let Some(message) = mismatch {
            warn!(mode = ?mode, data_kind = ?outcome.data_kind, "data_kind_mismatch");
            ctx.warnings.push(message.to_string());
        }

        if let Some(notice) = &outcome.notice {
            warn!(tie_widths = ?notice.widths, "fit_tie");
        }
        if ctx.state.use_manual_cutoffs() && mode == Mode::MicVsMic {
            ctx.warnings
                .push("manual cutoffs are ignored in mic-vs-mic mode".to_string());
        }

        ctx.report.input_meta.data_kind = Some(outcome.data_kind);
        ctx.notice = outcome.notice.clone();
        ctx.state = ctx.state.with_fit(&outcome);
        Ok(())
    }
}
