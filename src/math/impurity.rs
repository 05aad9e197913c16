//! Three-way Gini impurity used as the fitness of a cutoff pair.

use crate::model::Category;
use crate::model::classify::classify;
use crate::schema::v1::Mode;

/// `1 - sum(p_c^2)` over the three categories. `None` for an empty
/// population.
pub fn gini(population: &[Category]) -> Option<f64> {
    let mut counts = [0usize; 3];
    for c in population {
        counts[c.index()] += 1;
    }
    gini_from_counts(&counts)
}

pub fn gini_from_counts(counts: &[usize; 3]) -> Option<f64> {
    let n: usize = counts.iter().sum();
    if n == 0 {
        return None;
    }
    let n = n as f64;
    let mut sum_sq = 0.0;
    for &c in counts {
        let p = c as f64 / n;
        sum_sq += p * p;
    }
    Some(1.0 - sum_sq)
}

/// Size-weighted Gini impurity of the three subsets produced by splitting
/// `x` at (`cutoff_s`, `cutoff_r`) under `mode`. Empty subsets contribute
/// nothing; an empty input scores 0.
pub fn score_split(x: &[f64], y: &[Category], cutoff_s: f64, cutoff_r: f64, mode: Mode) -> f64 {
    // counts[subset][label]
    let mut counts = [[0usize; 3]; 3];
    for (&value, &label) in x.iter().zip(y) {
        let subset = classify(value, cutoff_s, cutoff_r, mode);
        counts[subset.index()][label.index()] += 1;
    }

    let total = x.len().min(y.len());
    if total == 0 {
        return 0.0;
    }
    let mut score = 0.0;
    for subset in &counts {
        let size: usize = subset.iter().sum();
        if let Some(g) = gini_from_counts(subset) {
            score += (size as f64 / total as f64) * g;
        }
    }
    score
}
