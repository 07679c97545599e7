use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::metrics::{MarketMetrics, registry_crosscheck};
use crate::pipeline::Stage;

pub struct Stage2Metrics;

impl Stage2Metrics {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Metrics {
    fn name(&self) -> &'static str {
        "stage2_metrics"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let reference = ctx.reference.as_ref().context("reference data missing")?;
        if let Some(msg) = registry_crosscheck(reference.total_patients()) {
            warn!("{}", msg);
            ctx.warnings.push(msg);
        }
        ctx.metrics = Some(MarketMetrics::headline());
        info!("metrics_ready");
        Ok(())
    }
}
