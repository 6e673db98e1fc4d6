use crate::charts::percent_delta;
use crate::curve::smooth::{smooth_bezpath, smooth_path};
use crate::foundation::core::{BezPath, Point};
use crate::foundation::math::clamp;

pub const CHART_WIDTH: f64 = 760.0;
pub const X_STEP: f64 = CHART_WIDTH / 11.0;
pub const AXIS_MIN_K: f64 = 0.0;
pub const AXIS_MAX_K: f64 = 500.0;
pub const Y_TOP: f64 = 32.0;
pub const Y_BOTTOM: f64 = 250.0;
/// Baseline the area fill closes against.
pub const AREA_FLOOR: f64 = 290.0;

const NET_INCOME_K: [f64; 12] = [
    14.0, 162.0, 101.0, 131.0, 176.0, 197.0, 204.0, 283.0, 207.0, 38.0, 307.0, 352.0,
];
const EBIT_K: [f64; 12] = [
    122.0, 148.0, 139.0, 161.0, 178.0, 194.0, 207.0, 226.0, 212.0, 166.0, 242.0, 263.0,
];
const EBITDA_K: [f64; 12] = [
    168.0, 194.0, 183.0, 207.0, 229.0, 246.0, 259.0, 281.0, 268.0, 224.0, 301.0, 323.0,
];
const GROSS_PROFIT_K: [f64; 12] = [
    258.0, 279.0, 271.0, 292.0, 307.0, 322.0, 337.0, 356.0, 344.0, 301.0, 372.0, 394.0,
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrendMetric {
    #[default]
    NetIncome,
    Ebit,
    Ebitda,
    GrossProfit,
}

impl TrendMetric {
    pub const ALL: [Self; 4] = [Self::NetIncome, Self::Ebit, Self::Ebitda, Self::GrossProfit];

    /// Twelve monthly values, January first.
    pub fn series_k(self) -> &'static [f64; 12] {
        match self {
            Self::NetIncome => &NET_INCOME_K,
            Self::Ebit => &EBIT_K,
            Self::Ebitda => &EBITDA_K,
            Self::GrossProfit => &GROSS_PROFIT_K,
        }
    }
}

/// Vertical position of `value_k` on the fixed 0..500 k axis.
pub fn map_y(value_k: f64) -> f64 {
    let ratio = clamp(
        (AXIS_MAX_K - value_k) / (AXIS_MAX_K - AXIS_MIN_K).max(1.0),
        0.0,
        1.0,
    );
    Y_TOP + (Y_BOTTOM - Y_TOP) * ratio
}

/// Geometry and headline numbers for one metric.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendChart {
    pub metric: TrendMetric,
    pub points: Vec<Point>,
}

impl TrendChart {
    pub fn new(metric: TrendMetric) -> Self {
        let points = metric
            .series_k()
            .iter()
            .enumerate()
            .map(|(i, &v)| Point::new(i as f64 * X_STEP, map_y(v)))
            .collect();
        Self { metric, points }
    }

    pub fn line_path(&self) -> String {
        smooth_path(&self.points)
    }

    pub fn area_path(&self) -> String {
        format!("{} L{CHART_WIDTH} {AREA_FLOOR} L0 {AREA_FLOOR} Z", self.line_path())
    }

    pub fn line_bezpath(&self) -> BezPath {
        smooth_bezpath(&self.points)
    }

    /// December value in SEK.
    pub fn latest_amount(&self) -> f64 {
        self.metric.series_k()[11] * 1000.0
    }

    pub fn previous_amount(&self) -> f64 {
        self.metric.series_k()[10] * 1000.0
    }

    /// December versus November, in percent.
    pub fn latest_delta(&self) -> f64 {
        let s = self.metric.series_k();
        percent_delta(s[11], s[10])
    }

    /// November versus October, in percent.
    pub fn previous_delta(&self) -> f64 {
        let s = self.metric.series_k();
        percent_delta(s[10], s[9])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/charts/trend.rs"]
mod tests;
