use crate::forecast::ForecastRow;
use crate::metrics::MarketMetrics;
use crate::reference::StateRow;

pub const PROGRESS_MAX: u32 = 2600;
pub const DEFAULT_BAR_WIDTH: usize = 40;

const FILLED: &str = "█";
const EMPTY: &str = "░";

pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_usd(value: u64) -> String {
    format!("${}", format_thousands(value))
}

pub fn progress_bar(value: u64, max: u64, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        let ratio = value.min(max) as f64 / max as f64;
        ((ratio * width as f64).round() as usize).min(width)
    };
    format!("{}{}", FILLED.repeat(filled), EMPTY.repeat(width - filled))
}

pub fn render_metrics(metrics: &MarketMetrics) -> String {
    let mut out = String::from("CF Market\n");
    for m in metrics.iter() {
        match &m.delta {
            Some(delta) => out.push_str(&format!("  {}: {} (+{})\n", m.label, m.value, delta)),
            None => out.push_str(&format!("  {}: {}\n", m.label, m.value)),
        }
    }
    out
}

pub fn render_state_table(rows: &[StateRow], width: usize) -> String {
    let name_width = rows
        .iter()
        .map(|r| r.state.len())
        .max()
        .unwrap_or(0)
        .max("State".len());
    let mut out = String::from("Patients per State\n");
    out.push_str(&format!("{:<name_width$}  CF Patients\n", "State"));
    for r in rows {
        out.push_str(&format!(
            "{:<name_width$}  {} {:>5}\n",
            r.state,
            progress_bar(r.patients as u64, PROGRESS_MAX as u64, width),
            r.patients
        ));
    }
    out
}

pub fn render_forecast_table(rows: &[ForecastRow]) -> String {
    let mut out = format!(
        "{:<6}{:>10}{:>14}{:>10}{:>18}\n",
        "Year", "Eligible", "Penetration", "Patients", "Revenue (USD)"
    );
    for r in rows {
        out.push_str(&format!(
            "{:<6}{:>10}{:>13.2}%{:>10}{:>18}\n",
            r.year,
            format_thousands(r.eligible_patients as u64),
            r.penetration_pct(),
            format_thousands(r.treated_patients),
            format_usd(r.revenue)
        ));
    }
    out
}

pub fn render_revenue_chart(rows: &[ForecastRow], width: usize) -> String {
    let peak = rows.iter().map(|r| r.revenue).max().unwrap_or(0);
    let mut out = String::from("Annual Revenue (USD)\n");
    for r in rows {
        out.push_str(&format!(
            "{} │{} {} ({} patients)\n",
            r.year,
            progress_bar(r.revenue, peak, width),
            format_usd(r.revenue),
            format_thousands(r.treated_patients)
        ));
    }
    out
}
