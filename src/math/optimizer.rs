//! Exhaustive cutoff search.
//!
//! For every window width the resistant cutoff walks from `min(x)` to
//! `max(x)` in steps of 1 with the susceptible cutoff `width` above it.
//! Every candidate is scored, so all widths tying for the optimum are seen.
//! Splits always use the disk-mode policy (`>= S`, `<= R`, `S > R`).

use crate::error::AnalysisError;
use crate::math::impurity::score_split;
use crate::model::Category;
use crate::schema::v1::Mode;

pub const WINDOW_WIDTHS: [u32; 4] = [1, 2, 3, 4];

/// Widest `max(x) - min(x)` the search will walk. Disk zones span tens of
/// millimetres and the MIC series tops out at 256.
pub const MAX_SEARCH_SPAN: f64 = 1024.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    pub cutoff_r: f64,
    pub cutoff_s: f64,
    /// Every width attaining the best score, ascending. Empty when the
    /// best width is unique.
    pub tie_widths: Vec<u32>,
}

#[derive(Debug, Clone, Copy)]
struct WidthBest {
    score: f64,
    cutoff_r: f64,
    cutoff_s: f64,
}

/// Finds the (R, S) pair that minimises the weighted three-way Gini
/// impurity of `y` when `x` is split under the disk-mode policy.
pub fn fit(x: &[f64], y: &[Category]) -> Result<FitResult, AnalysisError> {
    if x.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }
    if x.len() != y.len() {
        return Err(AnalysisError::InvalidDataset(format!(
            "{} values but {} categories",
            x.len(),
            y.len()
        )));
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(AnalysisError::InvalidDataset(
            "test values must be finite".to_string(),
        ));
    }
    ensure_both_classes(y)?;

    let min_x = x.iter().copied().fold(f64::INFINITY, f64::min);
    let max_x = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max_x - min_x;
    if span > MAX_SEARCH_SPAN {
        return Err(AnalysisError::SearchSpanTooWide {
            span,
            limit: MAX_SEARCH_SPAN,
        });
    }
    let steps = span.floor() as u64;

    let mut per_width = Vec::with_capacity(WINDOW_WIDTHS.len());
    for &width in &WINDOW_WIDTHS {
        per_width.push(best_for_width(x, y, min_x, steps, f64::from(width)));
    }

    let mut best_idx = 0usize;
    for (i, candidate) in per_width.iter().enumerate() {
        if candidate.score < per_width[best_idx].score {
            best_idx = i;
        }
    }
    let best_score = per_width[best_idx].score;

    let tied: Vec<u32> = WINDOW_WIDTHS
        .iter()
        .zip(&per_width)
        .filter(|(_, b)| b.score == best_score)
        .map(|(&w, _)| w)
        .collect();
    let tie_widths = if tied.len() > 1 { tied } else { Vec::new() };

    Ok(FitResult {
        cutoff_r: per_width[best_idx].cutoff_r,
        cutoff_s: per_width[best_idx].cutoff_s,
        tie_widths,
    })
}

fn best_for_width(x: &[f64], y: &[Category], min_x: f64, steps: u64, width: f64) -> WidthBest {
    let mut best = WidthBest {
        score: f64::INFINITY,
        cutoff_r: min_x,
        cutoff_s: min_x + width,
    };
    for step in 0..=steps {
        // Offsets are recomputed from min(x) so no rounding drift builds up.
        let cutoff_r = min_x + step as f64;
        let cutoff_s = cutoff_r + width;
        let score = score_split(x, y, cutoff_s, cutoff_r, Mode::Disk);
        // On equal scores the later (higher) pair replaces the earlier one.
        if score <= best.score {
            best = WidthBest {
                score,
                cutoff_r,
                cutoff_s,
            };
        }
    }
    best
}

pub(crate) fn ensure_both_classes(y: &[Category]) -> Result<(), AnalysisError> {
    let has_r = y.contains(&Category::Resistant);
    let has_s = y.contains(&Category::Susceptible);
    if has_r && has_s {
        return Ok(());
    }
    let mut present: Vec<&str> = Category::ALL
        .iter()
        .filter(|c| y.contains(c))
        .map(|c| c.name())
        .collect();
    if present.is_empty() {
        present.push("no categories");
    }
    Err(AnalysisError::Degenerate {
        found: format!("only {}", present.join(" + ")),
    })
}
