use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{json_writer, tsv_writer};
use crate::pipeline::Stage;

pub struct Stage4Output;

impl Stage4Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Output {
    fn name(&self) -> &'static str {
        "stage4_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let report = json_writer::build_report(ctx)?;

        if ctx.write_json {
            json_writer::write_report(&ctx.output.json_path, &report)?;
        }
        if ctx.write_tsv {
            tsv_writer::write_states_tsv(&ctx.output.states_tsv_path, &ctx.states)?;
            tsv_writer::write_forecast_tsv(&ctx.output.forecast_tsv_path, &ctx.forecast)?;
        }
        ctx.report = Some(report);

        info!("stage4_output_ready");
        Ok(())
    }
}
