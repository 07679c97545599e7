use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use cf_outlook::cli::{Cli, Commands, ForecastArgs, OutputFormat, RunArgs, StatesArgs};
use cf_outlook::ctx::Ctx;
use cf_outlook::forecast::ForecastInput;
use cf_outlook::io::{json_writer, render, summary, tsv_writer};
use cf_outlook::pipeline::Pipeline;
use cf_outlook::pipeline::stage1_reference::Stage1Reference;
use cf_outlook::pipeline::stage2_metrics::Stage2Metrics;
use cf_outlook::pipeline::stage3_forecast::Stage3Forecast;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => handle_run(args)?,
        Commands::Forecast(args) => handle_forecast(args)?,
        Commands::States(args) => handle_states(args)?,
        Commands::Metrics => handle_metrics()?,
    }

    Ok(())
}

fn new_ctx(input: ForecastInput) -> Ctx {
    Ctx::new(
        input,
        PathBuf::from("."),
        false,
        false,
        env!("CARGO_PKG_VERSION"),
    )
}

fn handle_run(args: RunArgs) -> Result<()> {
    let mut ctx = Ctx::new(
        args.inputs.to_input(),
        args.out,
        args.json,
        args.tsv,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.clamp_inputs = !args.inputs.no_clamp;

    Pipeline::full().run(&mut ctx)?;

    print!("{}", summary::format_summary(&ctx)?);
    if args.charts {
        let metrics = ctx.metrics.as_ref().context("market metrics missing")?;
        println!();
        print!("{}", render::render_metrics(metrics));
        println!();
        print!("{}", render::render_state_table(&ctx.states, args.width));
        println!();
        print!("{}", render::render_revenue_chart(&ctx.forecast, args.width));
    }
    print_warnings(&ctx);
    Ok(())
}

fn handle_forecast(args: ForecastArgs) -> Result<()> {
    let mut ctx = new_ctx(args.inputs.to_input());
    ctx.clamp_inputs = !args.inputs.no_clamp;
    Pipeline::new(vec![Box::new(Stage3Forecast::new())]).run(&mut ctx)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => {
            write!(out, "{}", render::render_forecast_table(&ctx.forecast))?;
            writeln!(out)?;
            write!(
                out,
                "{}",
                render::render_revenue_chart(&ctx.forecast, args.width)
            )?;
        }
        OutputFormat::Tsv => tsv_writer::write_forecast_rows(&mut out, &ctx.forecast)?,
        OutputFormat::Json => {
            let section = json_writer::forecast_section(&ctx.input, &ctx.forecast);
            serde_json::to_writer_pretty(&mut out, &section)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn handle_states(args: StatesArgs) -> Result<()> {
    let mut ctx = new_ctx(ForecastInput::default());
    Pipeline::new(vec![Box::new(Stage1Reference::new())]).run(&mut ctx)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => write!(
            out,
            "{}",
            render::render_state_table(&ctx.states, args.width)
        )?,
        OutputFormat::Tsv => tsv_writer::write_state_rows(&mut out, &ctx.states)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &json_writer::state_entries(&ctx.states))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn handle_metrics() -> Result<()> {
    let mut ctx = new_ctx(ForecastInput::default());
    Pipeline::new(vec![
        Box::new(Stage1Reference::new()),
        Box::new(Stage2Metrics::new()),
    ])
    .run(&mut ctx)?;

    let metrics = ctx.metrics.as_ref().context("market metrics missing")?;
    print!("{}", render::render_metrics(metrics));
    if let Some(reference) = &ctx.reference {
        println!(
            "  State registry total: {}",
            render::format_thousands(reference.total_patients())
        );
    }
    print_warnings(&ctx);
    Ok(())
}

fn print_warnings(ctx: &Ctx) {
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
