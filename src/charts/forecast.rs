use std::f64::consts::TAU;

use crate::charts::percent_delta;
use crate::curve::smooth::smooth_path;
use crate::foundation::core::Point;
use crate::foundation::math::clamp;

pub const CHART_WIDTH: f64 = 682.0;
pub const X_STEP: f64 = CHART_WIDTH / 11.0;
pub const Y_TOP: f64 = 18.0;
pub const Y_BOTTOM: f64 = 170.0;
pub const AREA_FLOOR: f64 = 190.0;
/// Last month (0-based, June) that has actuals.
pub const ACTUAL_CUTOFF: usize = 5;

const BASE_K: [f64; 12] = [
    280.0, 298.0, 312.0, 326.0, 340.0, 352.0, 364.0, 379.0, 394.0, 409.0, 425.0, 442.0,
];
const ACTUAL_VARIANCE: [f64; ACTUAL_CUTOFF + 1] = [0.052, 0.034, -0.012, -0.026, 0.018, 0.029];
const DIMENSION_BASE: [f64; 4] = [200_000.0, 144_000.0, 150_000.0, 160_000.0];

/// Budget split by cost dimension for the selected month.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DimensionRow {
    pub name: String,
    pub amount: f64,
}

/// Rolling forecast: actuals through June, a shaped projection after.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlanForecast {
    /// Seasonally adjusted plan.
    pub base: [f64; 12],
    /// Actuals up to the cutoff, projection after.
    pub values: [f64; 12],
    min: f64,
    max: f64,
    padding: f64,
}

impl Default for PlanForecast {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanForecast {
    pub fn new() -> Self {
        let base: [f64; 12] = std::array::from_fn(|i| {
            let seasonal = 1.0 + ((i as f64 - 1.0) / 12.0 * TAU).sin() * 0.018;
            BASE_K[i] * seasonal
        });
        let actual: [f64; 12] = std::array::from_fn(|i| match ACTUAL_VARIANCE.get(i) {
            Some(v) => base[i] * (1.0 + v),
            None => base[i],
        });

        let trailing = &actual[ACTUAL_CUTOFF.saturating_sub(2)..=ACTUAL_CUTOFF];
        let trailing_avg = trailing.iter().sum::<f64>() / trailing.len().max(1) as f64;
        let future_months = (12 - ACTUAL_CUTOFF).max(1) as f64;

        let values: [f64; 12] = std::array::from_fn(|i| {
            if i <= ACTUAL_CUTOFF {
                return actual[i];
            }
            let b = base[i];
            let phase = (i - ACTUAL_CUTOFF) as f64 / future_months;
            let dip_distance = (phase - 0.32) / 0.2;
            let dip = -0.055 * (-(dip_distance * dip_distance)).exp();
            let recovery = 0.11 * phase.powf(1.7);
            let tilt = -0.012 + 0.02 * phase;
            let momentum = (trailing_avg - b) / b.max(1.0) * (1.0 - phase * 0.55);
            let driver = 1.0 + ((i as f64 + 2.0) / 12.0 * TAU).sin() * 0.024;
            let projected = b * (1.0 + dip + recovery + tilt + momentum) * driver;
            clamp(projected, b * 0.7, b * 1.48)
        });

        let (min, max) = base
            .iter()
            .chain(values.iter())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let padding = ((max - min) * 0.18).max(24.0);
        Self {
            base,
            values,
            min,
            max,
            padding,
        }
    }

    /// Vertical chart position of `value_k`, padded so the line never touches the edges.
    pub fn map_y(&self, value_k: f64) -> f64 {
        let lo = self.min - self.padding;
        let hi = self.max + self.padding;
        let ratio = clamp((hi - value_k) / (hi - lo), 0.0, 1.0);
        Y_TOP + (Y_BOTTOM - Y_TOP) * ratio
    }

    pub fn points(&self) -> Vec<Point> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| Point::new(i as f64 * X_STEP, self.map_y(v)))
            .collect()
    }

    pub fn line_path(&self) -> String {
        smooth_path(&self.points())
    }

    pub fn area_path(&self) -> String {
        format!("{} L{CHART_WIDTH} {AREA_FLOOR} L0 {AREA_FLOOR} Z", self.line_path())
    }

    /// x of the actual/forecast split line.
    pub fn cutoff_x(&self) -> f64 {
        ACTUAL_CUTOFF as f64 * X_STEP
    }

    pub fn is_actual(month: usize) -> bool {
        month <= ACTUAL_CUTOFF
    }

    /// Month-over-month change at `month`, in percent (January compares with itself).
    pub fn month_delta(&self, month: usize) -> f64 {
        let m = month.min(11);
        let cur = self.values[m];
        let prev = self.values[m.saturating_sub(1)];
        (cur - prev) / prev.max(1.0) * 100.0
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn base_total(&self) -> f64 {
        self.base.iter().sum()
    }

    /// Full-year variance against the seasonal plan, in percent.
    pub fn total_delta(&self) -> f64 {
        percent_delta(self.total(), self.base_total())
    }

    /// Benchmark margin target that follows the annual variance.
    pub fn benchmark_target(&self) -> f64 {
        12.4 + self.total_delta() * 0.52
    }

    /// Cost dimension rows for `month`, scaled by that month's plan gap.
    ///
    /// Names beyond the supplied list are empty.
    pub fn dimension_rows(&self, month: usize, names: &[String]) -> Vec<DimensionRow> {
        let m = month.min(11);
        let month_modifier = 1.0 + (m as f64 / 11.0 - 0.5) * 0.08;
        let gap = self.values[m] / self.base[m].max(1.0) - 1.0;
        DIMENSION_BASE
            .iter()
            .enumerate()
            .map(|(i, &amount)| {
                let row_bias = 1.0 + (i as f64 - 1.5) * 0.02;
                DimensionRow {
                    name: names.get(i).cloned().unwrap_or_default(),
                    amount: amount * (1.0 + gap * 0.9) * month_modifier * row_bias,
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/charts/forecast.rs"]
mod tests;
