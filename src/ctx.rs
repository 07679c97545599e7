use std::path::PathBuf;

use crate::forecast::{ForecastInput, ForecastRow, ForecastTotals};
use crate::metrics::MarketMetrics;
use crate::reference::{ReferenceData, StateRow};
use crate::schema::v1::DashboardV1;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub states_tsv_path: PathBuf,
    pub forecast_tsv_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub tool_version: String,
    pub input: ForecastInput,
    pub clamp_inputs: bool,
    pub write_json: bool,
    pub write_tsv: bool,
    pub reference: Option<ReferenceData>,
    // ranked, most patients first
    pub states: Vec<StateRow>,
    pub metrics: Option<MarketMetrics>,
    pub forecast: Vec<ForecastRow>,
    pub totals: Option<ForecastTotals>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
    pub report: Option<DashboardV1>,
}

impl Ctx {
    pub fn new(
        input: ForecastInput,
        out_dir: PathBuf,
        write_json: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("dashboard.json");
        let states_tsv_path = out_dir.join("states.tsv");
        let forecast_tsv_path = out_dir.join("forecast.tsv");
        Self {
            tool_version: tool_version.to_string(),
            input,
            clamp_inputs: true,
            write_json,
            write_tsv,
            reference: None,
            states: Vec::new(),
            metrics: None,
            forecast: Vec::new(),
            totals: None,
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                json_path,
                states_tsv_path,
                forecast_tsv_path,
            },
            report: None,
        }
    }

    pub fn writes_files(&self) -> bool {
        self.write_json || self.write_tsv
    }
}
