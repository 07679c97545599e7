use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub market: Vec<MarketMetric>,
    pub registry: RegistrySummary,
    pub states: Vec<StateEntry>,
    pub map: MapLayer,
    pub forecast: ForecastSection,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketMetric {
    pub label: String,
    pub value: String,
    pub delta: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySummary {
    pub states: u64,
    pub total_patients: u64,
    pub max_patients: u32,
    pub progress_max: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateEntry {
    pub state: String,
    pub code: String,
    pub patients: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapLayer {
    pub location_mode: String,
    pub scope: String,
    pub color_scale: String,
    pub cells: Vec<MapCell>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapCell {
    pub code: String,
    pub patients: u32,
    pub hover: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSection {
    pub inputs: ForecastInputs,
    pub rows: Vec<ForecastYear>,
    pub totals: ForecastTotals,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastInputs {
    pub price_per_patient_usd: u64,
    pub penetration_year5_pct: f64,
    pub penetration_year10_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastYear {
    pub year: u16,
    pub eligible_patients: u32,
    pub penetration_fraction: f64,
    pub penetration_pct: f64,
    pub treated_patients: u64,
    pub revenue_usd: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastTotals {
    pub treated_patients: u64,
    pub revenue_usd: u64,
    pub peak_year: Option<u16>,
    pub peak_revenue_usd: u64,
}
