use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{export, json_writer};
use crate::pipeline::Stage;

pub struct Stage5Output;

impl Stage5Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Output {
    fn name(&self) -> &'static str {
        "stage5_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        ctx.report = json_writer::build_report(ctx)?;

        if ctx.write_json {
            json_writer::write_json(&ctx.output.json_path, ctx)?;
            info!(path = %ctx.output.json_path.display(), "json_written");
        }
        if ctx.write_csv {
            export::write_csv(&ctx.output.csv_path, &ctx.state)?;
            info!(path = %ctx.output.csv_path.display(), "csv_written");
        }

        info!("stage5_output_ready");
        Ok(())
    }
}
