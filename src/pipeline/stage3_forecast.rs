use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::forecast::{DASHBOARD_INPUTS, forecast, totals};
use crate::pipeline::Stage;

pub struct Stage3Forecast;

impl Stage3Forecast {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Forecast {
    fn name(&self) -> &'static str {
        "stage3_forecast"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.clamp_inputs {
            let (clamped, notes) = DASHBOARD_INPUTS.clamp(&ctx.input);
            for note in notes {
                warn!("{}", note);
                ctx.warnings.push(note);
            }
            ctx.input = clamped;
        }
        ctx.input.validate()?;

        let rows = forecast(&ctx.input);
        let sums = totals(&rows);
        info!(
            price_per_patient = ctx.input.price_per_patient,
            year5_pct = ctx.input.penetration_year5_pct,
            year10_pct = ctx.input.penetration_year10_pct,
            revenue_total = sums.revenue,
            "forecast_ready"
        );
        ctx.forecast = rows;
        ctx.totals = Some(sums);
        Ok(())
    }
}
