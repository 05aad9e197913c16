use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage3Errors;

impl Stage3Errors {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Errors {
    fn name(&self) -> &'static str {
        "stage3_errors"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        ctx.state = ctx.state.refresh_error_tables()?;
        let tables = ctx.state.error_tables().context("error tables missing")?;
        info!(
            samples = tables.overall.sample_count,
            very_major = tables.overall.very_major_count,
            major = tables.overall.major_count,
            minor = tables.overall.minor_count,
            "error_tables_ready"
        );
        if let Some(agreement) = &tables.agreement {
            info!(
                essential = agreement.essential,
                categorical = agreement.categorical,
                "agreement_ready"
            );
        }
        Ok(())
    }
}
