use tracing::{debug, info};

use crate::config::{CutoffTexts, SanityLimits};
use crate::error::{AnalysisError, TieNotice};
use crate::math::optimizer;
use crate::model::bins::{round_to_integers, snap_to_mic_bins};
use crate::model::classify::classify_all_y;
use crate::model::detect::detect;
use crate::model::{CutoffPair, Dataset, MicCutoffPair};
use crate::schema::v1::{CutoffOrigin, DataKind, Mode};

#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    pub x_cutoffs: CutoffPair,
    pub mic_cutoffs: MicCutoffPair,
    pub origin: CutoffOrigin,
    pub data_kind: DataKind,
    pub notice: Option<TieNotice>,
}

/// Resolves the x-axis cutoffs for a session.
///
/// Manual cutoffs (disk mode) must parse and be non-negative; they are
/// then used as entered. In MIC vs
/// MIC mode the x cutoffs are the MIC breakpoints. Otherwise the optimizer
/// runs on the reference categories and the result is rounded to integers
/// for disk data or snapped to standard MIC values for MIC data.
pub fn fit(
    dataset: &Dataset,
    texts: &CutoffTexts,
    mode: Mode,
    use_manual_cutoffs: bool,
    limits: &SanityLimits,
) -> Result<FitOutcome, AnalysisError> {
    let mic_cutoffs = texts.parse_mic(limits)?;
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }
    let x = dataset.x_values();
    let data_kind = detect(&x)?;

    if use_manual_cutoffs && mode == Mode::Disk {
        let cutoffs = texts.parse_x()?;
        return Ok(FitOutcome {
            x_cutoffs: cutoffs,
            mic_cutoffs,
            origin: CutoffOrigin::Manual,
            data_kind,
            notice: None,
        });
    }

    if mode == Mode::MicVsMic {
        return Ok(FitOutcome {
            x_cutoffs: CutoffPair {
                s: mic_cutoffs.s,
                r: mic_cutoffs.r,
            },
            mic_cutoffs,
            origin: CutoffOrigin::MicVsMic,
            data_kind,
            notice: None,
        });
    }

    let y = classify_all_y(&dataset.y_values(), mic_cutoffs);
    optimizer::ensure_both_classes(&y)?;
    let result = optimizer::fit(&x, &y)?;
    debug!(
        cutoff_r = result.cutoff_r,
        cutoff_s = result.cutoff_s,
        "optimizer_raw_cutoffs"
    );

    let raw = CutoffPair {
        s: result.cutoff_s,
        r: result.cutoff_r,
    };
    let x_cutoffs = match data_kind {
        DataKind::Disk => round_to_integers(raw),
        DataKind::Mic => snap_to_mic_bins(raw),
    };
    let notice = if result.tie_widths.is_empty() {
        None
    } else {
        Some(TieNotice {
            widths: result.tie_widths,
        })
    };
    info!(
        cutoff_s = x_cutoffs.s,
        cutoff_r = x_cutoffs.r,
        ties = notice.is_some(),
        "cutoffs_fitted"
    );

    Ok(FitOutcome {
        x_cutoffs,
        mic_cutoffs,
        origin: CutoffOrigin::Fitted,
        data_kind,
        notice,
    })
}
