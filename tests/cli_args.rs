use clap::Parser;
use cf_outlook::cli::{Cli, Commands, OutputFormat};
use cf_outlook::forecast::ForecastInput;

#[test]
fn forecast_defaults_match_dashboard() {
    let cli = Cli::parse_from(["cf-outlook", "forecast"]);
    match cli.command {
        Commands::Forecast(args) => {
            assert_eq!(args.inputs.to_input(), ForecastInput::default());
            assert!(!args.inputs.no_clamp);
            assert_eq!(args.format, OutputFormat::Text);
        }
        _ => panic!("expected forecast command"),
    }
}

#[test]
fn run_accepts_inputs_and_outputs() {
    let cli = Cli::parse_from([
        "cf-outlook",
        "run",
        "--out",
        "out",
        "--price",
        "250000",
        "--year5",
        "2.5",
        "--year10",
        "7.5",
        "--json",
        "--tsv",
    ]);
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.inputs.price, 250_000);
            assert_eq!(args.inputs.year5, 2.5);
            assert_eq!(args.inputs.year10, 7.5);
            assert!(args.json);
            assert!(args.tsv);
            assert!(!args.charts);
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn negative_price_is_rejected_by_parser() {
    let res = Cli::try_parse_from(["cf-outlook", "forecast", "--price", "-5"]);
    assert!(res.is_err());
}

#[test]
fn states_format_json_is_accepted() {
    let cli = Cli::parse_from(["cf-outlook", "states", "--format", "json"]);
    match cli.command {
        Commands::States(args) => assert_eq!(args.format, OutputFormat::Json),
        _ => panic!("expected states command"),
    }
}
