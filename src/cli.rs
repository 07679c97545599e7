use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::forecast::{
    DEFAULT_PRICE_PER_PATIENT, DEFAULT_YEAR5_PCT, DEFAULT_YEAR10_PCT, ForecastInput,
};
use crate::io::render::DEFAULT_BAR_WIDTH;

#[derive(Debug, Parser)]
#[command(
    name = "cf-outlook",
    version,
    about = "Cystic fibrosis market outlook and revenue forecast"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute every panel, print the summary and optionally write files
    Run(RunArgs),
    /// Print the ten-year revenue forecast
    Forecast(ForecastArgs),
    /// Print patients per state, most patients first
    States(StatesArgs),
    /// Print the headline market metrics
    Metrics,
}

#[derive(Debug, Args)]
pub struct ForecastInputArgs {
    #[arg(long, default_value_t = DEFAULT_PRICE_PER_PATIENT, help = "Price per patient (USD)")]
    pub price: u64,

    #[arg(long, default_value_t = DEFAULT_YEAR5_PCT, help = "Penetration in year 5 (2030), percent")]
    pub year5: f64,

    #[arg(long, default_value_t = DEFAULT_YEAR10_PCT, help = "Penetration in year 10 (2035), percent")]
    pub year10: f64,

    #[arg(
        long,
        default_value_t = false,
        help = "Skip the dashboard input bounds (values must still be valid percentages)"
    )]
    pub no_clamp: bool,
}

impl ForecastInputArgs {
    pub fn to_input(&self) -> ForecastInput {
        ForecastInput::new(self.price, self.year5, self.year10)
    }
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, default_value = "cf-outlook-out")]
    pub out: PathBuf,

    #[command(flatten)]
    pub inputs: ForecastInputArgs,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(long, default_value_t = false, help = "Also print the state table and revenue chart")]
    pub charts: bool,

    #[arg(long, default_value_t = DEFAULT_BAR_WIDTH, help = "Bar width in cells")]
    pub width: usize,
}

#[derive(Debug, Args)]
pub struct ForecastArgs {
    #[command(flatten)]
    pub inputs: ForecastInputArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, default_value_t = DEFAULT_BAR_WIDTH, help = "Bar width in cells")]
    pub width: usize,
}

#[derive(Debug, Args)]
pub struct StatesArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, default_value_t = DEFAULT_BAR_WIDTH, help = "Bar width in cells")]
    pub width: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Tsv,
    Json,
}
