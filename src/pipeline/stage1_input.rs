use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::dataset::read_dataset;
use crate::pipeline::Stage;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        info!(input = %ctx.input.display(), "input_file");
        let dataset = read_dataset(&ctx.input)?;
        info!(samples = dataset.len(), "dataset_loaded");

        ctx.report.input_meta.samples = dataset.len() as u64;
        ctx.state = ctx.state.with_dataset(dataset);
        Ok(())
    }
}
