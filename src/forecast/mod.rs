mod bounds;
mod penetration;

use anyhow::{Result, bail};

pub use bounds::{DASHBOARD_INPUTS, InputBounds, NumberInput};
pub use penetration::penetration_curve;

pub const FIRST_YEAR: u16 = 2026;
pub const HORIZON_YEARS: usize = 10;
// 2030, first year with non-zero penetration
pub const RAMP_START_INDEX: usize = 4;

pub const ELIGIBLE_PATIENTS: [u32; HORIZON_YEARS] = [
    28000, 28700, 29400, 30100, 30800, 31500, 32200, 32900, 33600, 34300,
];

pub const DEFAULT_PRICE_PER_PATIENT: u64 = 330_000;
pub const DEFAULT_YEAR5_PCT: f64 = 1.0;
pub const DEFAULT_YEAR10_PCT: f64 = 5.0;

// Absorbs binary rounding of decimal percentages before flooring.
const FLOOR_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastInput {
    pub price_per_patient: u64,
    pub penetration_year5_pct: f64,
    pub penetration_year10_pct: f64,
}

impl Default for ForecastInput {
    fn default() -> Self {
        Self {
            price_per_patient: DEFAULT_PRICE_PER_PATIENT,
            penetration_year5_pct: DEFAULT_YEAR5_PCT,
            penetration_year10_pct: DEFAULT_YEAR10_PCT,
        }
    }
}

impl ForecastInput {
    pub fn new(price_per_patient: u64, year5_pct: f64, year10_pct: f64) -> Self {
        Self {
            price_per_patient,
            penetration_year5_pct: year5_pct,
            penetration_year10_pct: year10_pct,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.price_per_patient == 0 {
            bail!("price per patient must be positive");
        }
        check_pct("year-5 penetration", self.penetration_year5_pct)?;
        check_pct("year-10 penetration", self.penetration_year10_pct)?;
        Ok(())
    }
}

fn check_pct(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        bail!("{} must be a finite percentage, got {}", name, value);
    }
    if !(0.0..=100.0).contains(&value) {
        bail!("{} must be within [0, 100], got {}", name, value);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastRow {
    pub year: u16,
    pub eligible_patients: u32,
    pub penetration_fraction: f64,
    pub treated_patients: u64,
    pub revenue: u64,
}

impl ForecastRow {
    pub fn penetration_pct(&self) -> f64 {
        self.penetration_fraction * 100.0
    }
}

pub fn forecast(input: &ForecastInput) -> Vec<ForecastRow> {
    let curve = penetration_curve(input.penetration_year5_pct, input.penetration_year10_pct);
    ELIGIBLE_PATIENTS
        .iter()
        .zip(curve)
        .enumerate()
        .map(|(i, (&eligible, fraction))| {
            // `as` saturates, so a negative product lands on zero.
            let treated = (eligible as f64 * fraction + FLOOR_EPSILON).floor() as u64;
            ForecastRow {
                year: FIRST_YEAR + i as u16,
                eligible_patients: eligible,
                penetration_fraction: fraction,
                treated_patients: treated,
                revenue: treated.saturating_mul(input.price_per_patient),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ForecastTotals {
    pub treated_patients: u64,
    pub revenue: u64,
    pub peak_year: Option<u16>,
    pub peak_revenue: u64,
}

pub fn totals(rows: &[ForecastRow]) -> ForecastTotals {
    let mut out = ForecastTotals::default();
    for row in rows {
        out.treated_patients += row.treated_patients;
        out.revenue = out.revenue.saturating_add(row.revenue);
        if row.revenue > out.peak_revenue {
            out.peak_revenue = row.revenue;
            out.peak_year = Some(row.year);
        }
    }
    out
}

pub fn row_for_year(rows: &[ForecastRow], year: u16) -> Option<&ForecastRow> {
    rows.iter().find(|r| r.year == year)
}
