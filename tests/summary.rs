use cf_outlook::ctx::Ctx;
use cf_outlook::forecast::ForecastInput;
use cf_outlook::io::summary::format_summary;
use cf_outlook::pipeline::Pipeline;
use cf_outlook::pipeline::stage1_reference::Stage1Reference;
use cf_outlook::pipeline::stage2_metrics::Stage2Metrics;
use cf_outlook::pipeline::stage3_forecast::Stage3Forecast;

#[test]
fn summary_format() {
    let mut ctx = Ctx::new(
        ForecastInput::default(),
        std::path::PathBuf::from("out"),
        false,
        false,
        "0.0.0-test",
    );
    Pipeline::new(vec![
        Box::new(Stage1Reference::new()),
        Box::new(Stage2Metrics::new()),
        Box::new(Stage3Forecast::new()),
    ])
    .run(&mut ctx)
    .unwrap();

    let s = format_summary(&ctx).unwrap();
    assert!(s.contains("cf-outlook v0.0.0-test"));
    assert!(s.contains("Market: 40,000 U.S., 105,000 global, ~28,000 F508del"));
    assert!(s.contains("Registry: 51 states, 33,678 patients"));
    assert!(s.contains("Inputs: price=$330,000 year5=1.00% year10=5.00%"));
    assert!(s.contains("2030: 308 patients, $101,640,000"));
    assert!(s.contains("2035: 1,715 patients, $565,950,000"));
    assert!(s.contains("Cumulative revenue: $1,965,480,000"));
    assert!(s.contains("Peak year: 2035"));
}

#[test]
fn clamped_inputs_are_recorded_as_warnings() {
    let mut ctx = Ctx::new(
        ForecastInput::new(500_000, 1.0, 5.0),
        std::path::PathBuf::from("out"),
        false,
        false,
        "0.0.0-test",
    );
    Pipeline::new(vec![Box::new(Stage3Forecast::new())])
        .run(&mut ctx)
        .unwrap();
    assert_eq!(ctx.input.price_per_patient, 400_000);
    assert_eq!(ctx.warnings.len(), 1);
}

#[test]
fn unclamped_invalid_input_fails_the_stage() {
    let mut ctx = Ctx::new(
        ForecastInput::new(330_000, 1.0, 150.0),
        std::path::PathBuf::from("out"),
        false,
        false,
        "0.0.0-test",
    );
    ctx.clamp_inputs = false;
    let res = Pipeline::new(vec![Box::new(Stage3Forecast::new())]).run(&mut ctx);
    assert!(res.is_err());
    assert!(ctx.forecast.is_empty());
}
