use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ctx::Ctx;
use crate::forecast::{self, ForecastInput, ForecastRow, HORIZON_YEARS};
use crate::io::render::PROGRESS_MAX;
use crate::metrics::MarketMetrics;
use crate::reference::StateRow;
use crate::schema::v1::{
    DashboardV1, ForecastInputs, ForecastSection, ForecastTotals, ForecastYear, MapCell, MapLayer,
    MarketMetric, RegistrySummary, StateEntry,
};

pub fn build_report(ctx: &Ctx) -> Result<DashboardV1> {
    let reference = ctx.reference.as_ref().context("reference data missing")?;
    let metrics = ctx.metrics.as_ref().context("market metrics missing")?;
    if ctx.forecast.len() != HORIZON_YEARS {
        bail!(
            "forecast has {} rows, expected {}",
            ctx.forecast.len(),
            HORIZON_YEARS
        );
    }

    let registry = RegistrySummary {
        states: reference.registry.len() as u64,
        total_patients: reference.total_patients(),
        max_patients: reference.max_patients(),
        progress_max: PROGRESS_MAX,
    };

    let map = MapLayer {
        location_mode: "USA-states".to_string(),
        scope: "usa".to_string(),
        color_scale: "Viridis".to_string(),
        cells: reference
            .join()
            .into_iter()
            .map(|r| MapCell {
                code: r.code,
                patients: r.patients,
                hover: r.state,
            })
            .collect(),
    };

    Ok(DashboardV1 {
        tool: "cf-outlook".to_string(),
        version: ctx.tool_version.clone(),
        schema_version: "v1".to_string(),
        market: market_entries(metrics),
        registry,
        states: state_entries(&ctx.states),
        map,
        forecast: forecast_section(&ctx.input, &ctx.forecast),
        warnings: ctx.warnings.clone(),
    })
}

pub fn write_report(path: &Path, report: &DashboardV1) -> Result<()> {
    crate::io::write_json(path, report)
}

pub fn market_entries(metrics: &MarketMetrics) -> Vec<MarketMetric> {
    metrics
        .iter()
        .map(|m| MarketMetric {
            label: m.label.clone(),
            value: m.value.clone(),
            delta: m.delta.clone(),
        })
        .collect()
}

pub fn state_entries(rows: &[StateRow]) -> Vec<StateEntry> {
    rows.iter()
        .map(|r| StateEntry {
            state: r.state.clone(),
            code: r.code.clone(),
            patients: r.patients,
        })
        .collect()
}

pub fn forecast_section(input: &ForecastInput, rows: &[ForecastRow]) -> ForecastSection {
    let sums = forecast::totals(rows);
    ForecastSection {
        inputs: ForecastInputs {
            price_per_patient_usd: input.price_per_patient,
            penetration_year5_pct: input.penetration_year5_pct,
            penetration_year10_pct: input.penetration_year10_pct,
        },
        rows: rows
            .iter()
            .map(|r| ForecastYear {
                year: r.year,
                eligible_patients: r.eligible_patients,
                penetration_fraction: r.penetration_fraction,
                penetration_pct: r.penetration_pct(),
                treated_patients: r.treated_patients,
                revenue_usd: r.revenue,
            })
            .collect(),
        totals: ForecastTotals {
            treated_patients: sums.treated_patients,
            revenue_usd: sums.revenue,
            peak_year: sums.peak_year,
            peak_revenue_usd: sums.peak_revenue,
        },
    }
}
