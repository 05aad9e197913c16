use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::io::format_value;
use crate::io::table::result_table;
use crate::model::bins::{MIC_EDGES, export_x_edges, histogram2d};
use crate::state::AnalysisState;

pub const HISTOGRAM_CAPTION: &str = "The chart below plots disk zone (on x) vs mic (on y)";

pub fn write_csv(path: &Path, state: &AnalysisState) -> Result<()> {
    let content = render_csv(state)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    w.write_all(content.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    w.flush()?;
    Ok(())
}

/// Error table rows, then a text histogram of test value against MIC with
/// the highest MIC row first.
pub fn render_csv(state: &AnalysisState) -> Result<String> {
    let dataset = state
        .dataset()
        .context("no dataset loaded; load one before exporting")?;
    let tables = state
        .error_tables()
        .context("error tables missing; refresh them before exporting")?;

    let mut out = String::new();
    for row in result_table(state.strain_name(), state.mode(), state.x_cutoffs(), tables) {
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out.push_str("\n\n\n");
    out.push_str(HISTOGRAM_CAPTION);
    out.push('\n');

    let x_edges = export_x_edges(state.mode());
    let y_edges = MIC_EDGES;
    let counts = histogram2d(
        &dataset.x_values(),
        &dataset.y_values(),
        &x_edges,
        &y_edges,
    );

    let ny = y_edges.len() - 1;
    for yi in (0..ny).rev() {
        let mut line = vec![format_value(y_edges[yi])];
        for column in &counts {
            let c = column[yi];
            line.push(if c > 0 { c.to_string() } else { String::new() });
        }
        out.push_str(&line.join(","));
        out.push('\n');
    }
    let edges: Vec<String> = x_edges.iter().map(|&e| format_value(e)).collect();
    out.push(',');
    out.push_str(&edges.join(","));
    out.push('\n');

    Ok(out)
}
