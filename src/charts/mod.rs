//! Synthetic KPI charts shown next to the copilot demo.
//!
//! All values are in thousands (k SEK). Geometry is in the chart's own SVG viewBox units.

pub mod forecast;
pub mod pulse;
pub mod trend;

pub use forecast::{DimensionRow, PlanForecast};
pub use pulse::{ChartPulse, PulseFlags};
pub use trend::{TrendChart, TrendMetric};

/// Percent change from `previous` to `current`, guarded against tiny denominators.
pub fn percent_delta(current: f64, previous: f64) -> f64 {
    (current - previous) / previous.abs().max(1.0) * 100.0
}

/// `+1.2%` / `-0.4%` style label with one decimal.
pub fn format_percent(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.1}%")
}
