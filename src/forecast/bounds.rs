use crate::forecast::{
    DEFAULT_PRICE_PER_PATIENT, DEFAULT_YEAR5_PCT, DEFAULT_YEAR10_PCT, ForecastInput,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberInput {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl NumberInput {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputBounds {
    pub price: NumberInput,
    pub year5: NumberInput,
    pub year10: NumberInput,
}

pub const DASHBOARD_INPUTS: InputBounds = InputBounds {
    price: NumberInput {
        label: "Price per Patient (USD)",
        min: 100_000.0,
        max: 400_000.0,
        step: 10_000.0,
        default: DEFAULT_PRICE_PER_PATIENT as f64,
    },
    year5: NumberInput {
        label: "Penetration in Year 5 (2030) (%)",
        min: 0.0,
        max: 5.0,
        step: 0.1,
        default: DEFAULT_YEAR5_PCT,
    },
    year10: NumberInput {
        label: "Penetration in Year 10 (2035) (%)",
        min: 0.0,
        max: 10.0,
        step: 0.1,
        default: DEFAULT_YEAR10_PCT,
    },
};

impl InputBounds {
    pub fn defaults(&self) -> ForecastInput {
        ForecastInput {
            price_per_patient: self.price.default as u64,
            penetration_year5_pct: self.year5.default,
            penetration_year10_pct: self.year10.default,
        }
    }

    // NaN passes through; validate() rejects it.
    pub fn clamp(&self, input: &ForecastInput) -> (ForecastInput, Vec<String>) {
        let mut notes = Vec::new();

        let price = input.price_per_patient as f64;
        let price_per_patient = if self.price.contains(price) {
            input.price_per_patient
        } else {
            let clamped = self.price.clamp(price) as u64;
            notes.push(format!(
                "{} {} clamped to {}",
                self.price.label, input.price_per_patient, clamped
            ));
            clamped
        };

        let penetration_year5_pct = clamp_pct(&self.year5, input.penetration_year5_pct, &mut notes);
        let penetration_year10_pct =
            clamp_pct(&self.year10, input.penetration_year10_pct, &mut notes);

        (
            ForecastInput {
                price_per_patient,
                penetration_year5_pct,
                penetration_year10_pct,
            },
            notes,
        )
    }
}

fn clamp_pct(bounds: &NumberInput, value: f64, notes: &mut Vec<String>) -> f64 {
    if value.is_nan() || bounds.contains(value) {
        return value;
    }
    let clamped = bounds.clamp(value);
    notes.push(format!("{} {} clamped to {}", bounds.label, value, clamped));
    clamped
}
