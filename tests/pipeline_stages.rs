use cf_outlook::ctx::Ctx;
use cf_outlook::forecast::ForecastInput;
use cf_outlook::pipeline::Pipeline;
use tempfile::TempDir;

#[test]
fn full_pipeline_stage_order() {
    assert_eq!(
        Pipeline::full().stage_names(),
        vec![
            "stage0_scaffold",
            "stage1_reference",
            "stage2_metrics",
            "stage3_forecast",
            "stage4_output",
        ]
    );
}

#[test]
fn full_pipeline_populates_ctx_and_files() {
    let tmp = TempDir::new().unwrap();
    let out_dir = tmp.path().join("nested").join("out");
    let mut ctx = Ctx::new(
        ForecastInput::new(300_000, 0.5, 4.0),
        out_dir.clone(),
        true,
        false,
        "0.0.0-test",
    );
    Pipeline::full().run(&mut ctx).unwrap();

    assert_eq!(ctx.states.len(), 51);
    assert!(ctx.metrics.is_some());
    assert_eq!(ctx.forecast.len(), 10);
    assert!(ctx.report.is_some());
    assert!(out_dir.join("dashboard.json").exists());
    assert!(!out_dir.join("states.tsv").exists());
}
