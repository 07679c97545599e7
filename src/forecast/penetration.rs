use crate::forecast::{HORIZON_YEARS, RAMP_START_INDEX};

pub fn penetration_curve(year5_pct: f64, year10_pct: f64) -> [f64; HORIZON_YEARS] {
    let mut curve = [0.0; HORIZON_YEARS];
    let steps = (HORIZON_YEARS - RAMP_START_INDEX - 1) as f64;
    for (i, slot) in curve[RAMP_START_INDEX..].iter_mut().enumerate() {
        let pct = year5_pct + (year10_pct - year5_pct) * i as f64 / steps;
        *slot = pct / 100.0;
    }
    curve
}
