use crate::model::{CutoffPair, Dataset};
use crate::schema::v1::Mode;

/// Standard MIC reporting values (mg/L), used for detection and snapping.
pub const STANDARD_MIC_VALUES: [f64; 16] = [
    0.016, 0.03, 0.06, 0.12, 0.125, 0.25, 0.5, 1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0,
];

/// MIC bin edges for plotting and the exported text histogram.
pub const MIC_EDGES: [f64; 15] = [
    0.016, 0.03, 0.06, 0.12, 0.25, 0.5, 1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0,
];

pub const MIC_CLIP: (f64, f64) = (0.016, 256.0);
pub const DISK_CLIP: (f64, f64) = (5.0, 50.0);

/// Moves fitted cutoffs onto standard MIC values: R rounds up to the bin
/// it falls under, S rounds down to the bin it sits on or above. Values
/// outside the series are left alone.
pub fn snap_to_mic_bins(cutoffs: CutoffPair) -> CutoffPair {
    let bins = &STANDARD_MIC_VALUES;
    let mut r = cutoffs.r;
    let mut s = cutoffs.s;
    for i in 1..bins.len() {
        if r > bins[i - 1] && r <= bins[i] {
            r = bins[i];
        }
        if s >= bins[i - 1] && s < bins[i] {
            s = bins[i - 1];
        }
    }
    CutoffPair { s, r }
}

pub fn round_to_integers(cutoffs: CutoffPair) -> CutoffPair {
    CutoffPair {
        s: cutoffs.s.round(),
        r: cutoffs.r.round(),
    }
}

pub fn mic_index(value: f64) -> Option<usize> {
    STANDARD_MIC_VALUES.iter().position(|&b| b == value)
}

/// Bin of `value` under half-open `[e_i, e_{i+1})` bins with the last bin
/// closed on the right; `None` outside the edges.
pub fn bin_index(edges: &[f64], value: f64) -> Option<usize> {
    if edges.len() < 2 || value.is_nan() {
        return None;
    }
    let last = edges.len() - 1;
    if value < edges[0] || value > edges[last] {
        return None;
    }
    if value == edges[last] {
        return Some(last - 1);
    }
    (0..last).find(|&i| value >= edges[i] && value < edges[i + 1])
}

/// `counts[xi][yi]` for paired values.
pub fn histogram2d(x: &[f64], y: &[f64], x_edges: &[f64], y_edges: &[f64]) -> Vec<Vec<u64>> {
    let nx = x_edges.len().saturating_sub(1);
    let ny = y_edges.len().saturating_sub(1);
    let mut counts = vec![vec![0u64; ny]; nx];
    for (&xv, &yv) in x.iter().zip(y) {
        if let (Some(i), Some(j)) = (bin_index(x_edges, xv), bin_index(y_edges, yv)) {
            counts[i][j] += 1;
        }
    }
    counts
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub x_edges: Vec<f64>,
    pub y_edges: Vec<f64>,
    pub x_log: bool,
    pub counts: Vec<Vec<u64>>,
}

/// Heatmap counts of x against ln(MIC).
pub fn plot_data(dataset: &Dataset, mode: Mode) -> PlotData {
    let log_edges: Vec<f64> = MIC_EDGES.iter().map(|v| v.ln()).collect();
    let y: Vec<f64> = dataset
        .samples()
        .iter()
        .map(|s| s.y.clamp(MIC_CLIP.0, MIC_CLIP.1).ln())
        .collect();

    let (x, x_edges, x_log) = match mode {
        Mode::Disk => {
            let x: Vec<f64> = dataset
                .samples()
                .iter()
                .map(|s| s.x.clamp(DISK_CLIP.0, DISK_CLIP.1))
                .collect();
            let edges: Vec<f64> = (5..=50).map(f64::from).collect();
            (x, edges, false)
        }
        Mode::MicVsMic => {
            let x: Vec<f64> = dataset
                .samples()
                .iter()
                .map(|s| s.x.clamp(MIC_CLIP.0, MIC_CLIP.1).ln())
                .collect();
            (x, log_edges.clone(), true)
        }
    };

    let counts = histogram2d(&x, &y, &x_edges, &log_edges);
    PlotData {
        x_edges,
        y_edges: log_edges,
        x_log,
        counts,
    }
}

/// x edges of the exported text histogram.
pub fn export_x_edges(mode: Mode) -> Vec<f64> {
    match mode {
        Mode::Disk => (4..54).map(f64::from).collect(),
        Mode::MicVsMic => MIC_EDGES.to_vec(),
    }
}
