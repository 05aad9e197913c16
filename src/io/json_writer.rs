use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::io::table::cutoff_annotation;
use crate::model::taxonomy::{ErrorRecord, ErrorTables};
use crate::schema::v1::{
    Agreement, Cutoffs, DiskfitReportV1, ErrorBands, ErrorCounts, Errors, FitSummary, InputMeta,
    MicBreakpoints, Plot, XCutoffs,
};

pub fn build_report(ctx: &Ctx) -> Result<DiskfitReportV1> {
    let state = &ctx.state;
    let dataset = state.dataset().context("dataset missing")?;
    let tables = state.error_tables().context("error tables missing")?;

    let input_meta = InputMeta {
        samples: dataset.len() as u64,
        mode: state.mode(),
        data_kind: state.data_kind(),
        strain_name: state.strain_name().to_string(),
    };

    let x = state.x_cutoffs();
    let y = state.mic_cutoffs();
    let cutoffs = Cutoffs {
        x: XCutoffs {
            susceptible: x.s,
            resistant: x.r,
            annotation: cutoff_annotation(x, state.mode()),
            origin: state.origin(),
        },
        y: MicBreakpoints {
            susceptible: y.s,
            resistant: y.r,
        },
    };

    let fit = FitSummary {
        tie_widths: ctx
            .notice
            .as_ref()
            .map(|n| n.widths.clone())
            .unwrap_or_default(),
        notice: ctx.notice.as_ref().map(|n| n.to_string()),
    };

    let plot = ctx.plot.as_ref().map(|p| Plot {
        x_edges: p.x_edges.clone(),
        y_edges: p.y_edges.clone(),
        x_log: p.x_log,
        counts: p.counts.clone(),
    });

    let mut report = ctx.report.clone();
    report.input_meta = input_meta;
    report.cutoffs = Some(cutoffs);
    report.fit = Some(fit);
    report.errors = Some(errors_section(tables));
    report.plot = plot;
    Ok(report)
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let report = build_report(ctx)?;
    crate::io::write_json(path, &report)
}

fn errors_section(tables: &ErrorTables) -> Errors {
    Errors {
        total: counts(&tables.overall),
        bands: ErrorBands {
            i_plus2: counts(&tables.bands.i_plus2),
            i_plus1_minus1: counts(&tables.bands.i_plus1_minus1),
            i_minus2: counts(&tables.bands.i_minus2),
        },
        confusion_matrix: tables.confusion.cells,
        agreement: tables.agreement.map(|a| Agreement {
            essential: a.essential,
            categorical: a.categorical,
        }),
    }
}

fn counts(record: &ErrorRecord) -> ErrorCounts {
    ErrorCounts {
        num_strains: record.sample_count,
        very_major: record.very_major_count,
        major: record.major_count,
        minor: record.minor_count,
    }
}
