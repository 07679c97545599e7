use cf_outlook::forecast::{ForecastInput, forecast};
use cf_outlook::io::render::{
    format_thousands, progress_bar, render_forecast_table, render_metrics, render_revenue_chart,
    render_state_table,
};
use cf_outlook::metrics::MarketMetrics;
use cf_outlook::reference::ReferenceData;

#[test]
fn state_table_has_one_line_per_state() {
    let rows = ReferenceData::load().unwrap().ranked();
    let text = render_state_table(&rows, 20);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 53);
    assert!(lines[1].starts_with("State"));
    assert!(lines[2].starts_with("California"));
    assert!(lines[2].ends_with("2566"));
}

#[test]
fn revenue_chart_scales_to_peak() {
    let rows = forecast(&ForecastInput::default());
    let text = render_revenue_chart(&rows, 10);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert!(lines[1].starts_with("2026 │░░░░░░░░░░ $0"));
    assert!(lines[10].starts_with("2035 │██████████ $565,950,000"));
    assert!(lines[10].contains("(1,715 patients)"));
}

#[test]
fn forecast_table_formats_money() {
    let rows = forecast(&ForecastInput::default());
    let text = render_forecast_table(&rows);
    assert_eq!(text.lines().count(), 11);
    assert!(text.contains("$101,640,000"));
    assert!(text.contains("1.00%"));
}

#[test]
fn metrics_panel_lists_deltas() {
    let text = render_metrics(&MarketMetrics::headline());
    assert!(text.contains("Patients in the U.S.: 40,000 (+1000)"));
    assert!(text.contains("Patients Globally: 105,000 (+14.2%)"));
    assert!(text.contains("F508del Mutation: ~28,000\n"));
}

#[test]
fn thousands_separators() {
    assert_eq!(format_thousands(0), "0");
    assert_eq!(format_thousands(999), "999");
    assert_eq!(format_thousands(1000), "1,000");
    assert_eq!(format_thousands(103_950_000), "103,950,000");
}

#[test]
fn bar_fill_is_proportional() {
    assert_eq!(progress_bar(1300, 2600, 10), "█████░░░░░");
    assert_eq!(progress_bar(0, 2600, 4), "░░░░");
    assert_eq!(progress_bar(9999, 2600, 4), "████");
    assert_eq!(progress_bar(5, 0, 3), "░░░");
}
