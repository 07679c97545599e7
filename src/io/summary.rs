use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::forecast::row_for_year;
use crate::io::render::{format_thousands, format_usd};

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let reference = ctx
        .reference
        .as_ref()
        .context("reference data missing")?;
    let metrics = ctx.metrics.as_ref().context("market metrics missing")?;
    let totals = ctx.totals.as_ref().context("forecast totals missing")?;

    let mut out = String::new();
    out.push_str(&format!("cf-outlook v{}\n", ctx.tool_version));
    out.push_str(&format!(
        "Market: {} U.S., {} global, {} F508del\n",
        metrics.us.value, metrics.global.value, metrics.f508del.value
    ));
    out.push_str(&format!(
        "Registry: {} states, {} patients\n",
        reference.registry.len(),
        format_thousands(reference.total_patients())
    ));
    out.push_str(&format!(
        "Inputs: price={} year5={:.2}% year10={:.2}%\n",
        format_usd(ctx.input.price_per_patient),
        ctx.input.penetration_year5_pct,
        ctx.input.penetration_year10_pct
    ));
    for year in [2030, 2035] {
        if let Some(row) = row_for_year(&ctx.forecast, year) {
            out.push_str(&format!(
                "{}: {} patients, {}\n",
                year,
                format_thousands(row.treated_patients),
                format_usd(row.revenue)
            ));
        }
    }
    out.push_str(&format!(
        "Cumulative revenue: {}\n",
        format_usd(totals.revenue)
    ));
    match totals.peak_year {
        Some(year) => out.push_str(&format!("Peak year: {}\n", year)),
        None => out.push_str("Peak year: none\n"),
    }

    Ok(out)
}
