use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::io::{format_value, round2};
use crate::io::table::cutoff_annotation;
use crate::schema::v1::{DataKind, Mode};

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let state = &ctx.state;
    let dataset = state.dataset().context("dataset missing")?;
    let tables = state.error_tables().context("error tables missing")?;
    let mode = match state.mode() {
        Mode::Disk => "disk",
        Mode::MicVsMic => "mic_vs_mic",
    };
    let data = match state.data_kind() {
        Some(DataKind::Disk) => "disk",
        Some(DataKind::Mic) => "mic",
        None => "unknown",
    };
    let mic = state.mic_cutoffs();

    let mut out = String::new();
    out.push_str(&format!("diskfit v{}\n", version));
    out.push_str(&format!("Strain: {}\n", state.strain_name()));
    out.push_str(&format!(
        "Input: {} samples, mode={}, data={}\n",
        dataset.len(),
        mode,
        data
    ));
    out.push_str(&format!(
        "MIC breakpoints: <={} (S) / >={} (R)\n",
        format_value(mic.s),
        format_value(mic.r)
    ));
    out.push_str(&format!(
        "Cutoffs: {}\n",
        cutoff_annotation(state.x_cutoffs(), state.mode())
    ));
    let overall = &tables.overall;
    out.push_str(&format!(
        "Errors: very_major={} major={} minor={} (of {})\n",
        overall.very_major_count, overall.major_count, overall.minor_count, overall.sample_count
    ));
    if let Some(agreement) = &tables.agreement {
        out.push_str(&format!(
            "Agreement: essential={}% categorical={}%\n",
            format_value(round2(agreement.essential)),
            format_value(round2(agreement.categorical))
        ));
    }
    if let Some(notice) = &ctx.notice {
        out.push_str(&format!("Note: {}\n", notice));
    }
    Ok(out)
}
