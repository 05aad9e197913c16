use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::model::bins::plot_data;
use crate::pipeline::Stage;

pub struct Stage4Plot;

impl Stage4Plot {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Plot {
    fn name(&self) -> &'static str {
        "stage4_plot"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let dataset = ctx.state.dataset().context("dataset not loaded")?;
        let plot = plot_data(dataset, ctx.state.mode());
        info!(
            x_bins = plot.x_edges.len().saturating_sub(1),
            y_bins = plot.y_edges.len().saturating_sub(1),
            "plot_data_ready"
        );
        ctx.plot = Some(plot);
        Ok(())
    }
}
