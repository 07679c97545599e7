pub const US_PATIENTS: u64 = 40_000;
pub const GLOBAL_PATIENTS: u64 = 105_000;
pub const US_F508DEL_PATIENTS: u64 = 28_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketMetric {
    pub label: String,
    pub value: String,
    pub delta: Option<String>,
    pub approx_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketMetrics {
    pub us: MarketMetric,
    pub global: MarketMetric,
    pub f508del: MarketMetric,
}

impl MarketMetrics {
    pub fn headline() -> Self {
        Self {
            us: MarketMetric {
                label: "Patients in the U.S.".to_string(),
                value: "40,000".to_string(),
                delta: Some("1000".to_string()),
                approx_count: US_PATIENTS,
            },
            global: MarketMetric {
                label: "Patients Globally".to_string(),
                value: "105,000".to_string(),
                delta: Some("14.2%".to_string()),
                approx_count: GLOBAL_PATIENTS,
            },
            f508del: MarketMetric {
                label: "U.S. Patients w/ F508del Mutation".to_string(),
                value: "~28,000".to_string(),
                delta: None,
                approx_count: US_F508DEL_PATIENTS,
            },
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &MarketMetric> {
        [&self.us, &self.global, &self.f508del].into_iter()
    }
}

pub fn registry_crosscheck(registry_total: u64) -> Option<String> {
    if registry_total == US_PATIENTS {
        return None;
    }
    Some(format!(
        "state registry totals {} patients but the U.S. headline is {}; figures come from different sources and are shown as-is",
        registry_total, US_PATIENTS
    ))
}
