use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::forecast::ForecastRow;
use crate::io::create_buffered;
use crate::reference::StateRow;

pub const STATES_HEADER: &str = "state\tcode\tpatients";
pub const FORECAST_HEADER: &str =
    "year\teligible_patients\tpenetration_pct\ttreated_patients\trevenue_usd";

pub fn write_states_tsv(path: &Path, rows: &[StateRow]) -> Result<()> {
    let mut w = create_buffered(path)?;
    write_state_rows(&mut w, rows)?;
    w.flush()?;
    Ok(())
}

pub fn write_forecast_tsv(path: &Path, rows: &[ForecastRow]) -> Result<()> {
    let mut w = create_buffered(path)?;
    write_forecast_rows(&mut w, rows)?;
    w.flush()?;
    Ok(())
}

pub fn write_state_rows<W: Write>(w: &mut W, rows: &[StateRow]) -> Result<()> {
    writeln!(w, "{}", STATES_HEADER)?;
    for r in rows {
        writeln!(w, "{}\t{}\t{}", r.state, r.code, r.patients)?;
    }
    Ok(())
}

pub fn write_forecast_rows<W: Write>(w: &mut W, rows: &[ForecastRow]) -> Result<()> {
    writeln!(w, "{}", FORECAST_HEADER)?;
    for r in rows {
        writeln!(
            w,
            "{}\t{}\t{:.4}\t{}\t{}",
            r.year,
            r.eligible_patients,
            r.penetration_pct(),
            r.treated_patients,
            r.revenue
        )?;
    }
    Ok(())
}
