use std::fmt::Write as _;

use crate::foundation::core::{BezPath, Point};
use crate::foundation::math::{cubic, lerp};

/// Width of the divider viewBox in user units.
pub const VIEWBOX_WIDTH: f64 = 1440.0;

/// Number of points emitted by [`DividerCurve::samples`].
pub const SAMPLE_COUNT: usize = 36;

const LEFT_X: [f64; 4] = [0.0, 280.0, 480.0, 720.0];
const RIGHT_X: [f64; 4] = [720.0, 960.0, 1160.0, 1440.0];

/// One point on the divider edge: horizontal position in percent, vertical in px.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveSample {
    pub x_percent: f64,
    pub y_px: f64,
}

/// Divider shape for a fixed pair of edge heights.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DividerCurve {
    /// Height of both outer ends.
    pub side_y: f64,
    /// Height at the horizontal center.
    pub center_y: f64,
}

impl DividerCurve {
    pub const fn new(side_y: f64, center_y: f64) -> Self {
        Self { side_y, center_y }
    }

    /// Point on the curve at global parameter `u ∈ [0, 1]`.
    ///
    /// The first half of `u` walks the left segment, the second half the right one.
    pub fn point_at(&self, u: f64) -> Point {
        let (s, c) = (self.side_y, self.center_y);
        if u < 0.5 {
            let t = 2.0 * u;
            Point::new(
                cubic(LEFT_X[0], LEFT_X[1], LEFT_X[2], LEFT_X[3], t),
                cubic(s, s, c, c, t),
            )
        } else {
            let t = 2.0 * u - 1.0;
            Point::new(
                cubic(RIGHT_X[0], RIGHT_X[1], RIGHT_X[2], RIGHT_X[3], t),
                cubic(c, c, s, s, t),
            )
        }
    }

    /// Exactly [`SAMPLE_COUNT`] edge points from `0%` to `100%`.
    pub fn samples(&self) -> Vec<CurveSample> {
        let last = (SAMPLE_COUNT - 1) as f64;
        (0..SAMPLE_COUNT)
            .map(|k| {
                let p = self.point_at(k as f64 / last);
                CurveSample {
                    x_percent: p.x / VIEWBOX_WIDTH * 100.0,
                    y_px: p.y,
                }
            })
            .collect()
    }

    /// CSS `clip-path` polygon that keeps everything below the curve.
    pub fn clip_path(&self) -> String {
        let mut out = String::from("polygon(");
        for (i, s) in self.samples().iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}% {}px", s.x_percent, s.y_px);
        }
        out.push_str(", 100% 100%, 0% 100%)");
        out
    }

    /// SVG path data for the stroke.
    pub fn svg_path_d(&self) -> String {
        let (s, c) = (self.side_y, self.center_y);
        format!("M0 {s} C280 {s} 480 {c} 720 {c} C960 {c} 1160 {s} 1440 {s}")
    }

    pub fn to_bezpath(&self) -> BezPath {
        let (s, c) = (self.side_y, self.center_y);
        let mut path = BezPath::new();
        path.move_to((LEFT_X[0], s));
        path.curve_to((LEFT_X[1], s), (LEFT_X[2], c), (LEFT_X[3], c));
        path.curve_to((RIGHT_X[1], c), (RIGHT_X[2], s), (RIGHT_X[3], s));
        path
    }

    /// Closed region under the curve down to `height`, for filled rasters.
    pub fn to_fill_bezpath(&self, height: f64) -> BezPath {
        let mut path = self.to_bezpath();
        path.line_to((VIEWBOX_WIDTH, height));
        path.line_to((0.0, height));
        path.close_path();
        path
    }
}

/// Start and end value of one animated edge height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Travel {
    pub from: f64,
    pub to: f64,
}

impl Travel {
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    pub const fn fixed(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Value at `progress`, with the travel shortened by `scale`.
    pub fn at(&self, progress: f64, scale: f64) -> f64 {
        lerp(self.from, self.from + (self.to - self.from) * scale, progress)
    }
}

/// How a divider's side and center heights follow scroll progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveProfile {
    pub side: Travel,
    pub center: Travel,
}

impl CurveProfile {
    pub const fn new(side: Travel, center: Travel) -> Self {
        Self { side, center }
    }

    /// Curve at `progress` with the full travel.
    pub fn at(&self, progress: f64) -> DividerCurve {
        self.at_scaled(progress, 1.0)
    }

    pub fn at_scaled(&self, progress: f64, scale: f64) -> DividerCurve {
        DividerCurve::new(
            self.side.at(progress, scale),
            self.center.at(progress, scale),
        )
    }

    pub const COPILOT: Self = Self::new(Travel::new(1.0, 16.0), Travel::new(1.0, 128.0));
    pub const DASHBOARD: Self = Self::new(Travel::new(1.0, 128.0), Travel::new(1.0, 16.0));
    pub const CUSTOMERS: Self = Self::new(Travel::fixed(6.0), Travel::new(6.0, 86.0));
    pub const HOW_IT_WORKS: Self = Self::CUSTOMERS;
    pub const SECURITY: Self = Self::new(Travel::fixed(78.0), Travel::fixed(14.0));
}

/// Section-break shapes used on the solution pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DividerVariant {
    Dip,
    Rise,
    Soft,
    Copilot,
    Dashboard,
    Customers,
    HowItWorks,
    Security,
}

impl DividerVariant {
    pub const ALL: [Self; 8] = [
        Self::Dip,
        Self::Rise,
        Self::Soft,
        Self::Copilot,
        Self::Dashboard,
        Self::Customers,
        Self::HowItWorks,
        Self::Security,
    ];

    pub fn profile(self) -> CurveProfile {
        match self {
            Self::Dip => CurveProfile::new(Travel::new(1.0, 90.0), Travel::new(1.0, 20.0)),
            Self::Rise => CurveProfile::new(Travel::new(1.0, 6.0), Travel::new(1.0, 86.0)),
            Self::Soft => CurveProfile::new(Travel::new(1.0, 42.0), Travel::new(1.0, 46.0)),
            Self::Copilot => CurveProfile::COPILOT,
            Self::Dashboard => CurveProfile::DASHBOARD,
            Self::Customers => CurveProfile::CUSTOMERS,
            Self::HowItWorks => CurveProfile::HOW_IT_WORKS,
            Self::Security => CurveProfile::SECURITY,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dip => "dip",
            Self::Rise => "rise",
            Self::Soft => "soft",
            Self::Copilot => "copilot",
            Self::Dashboard => "dashboard",
            Self::Customers => "customers",
            Self::HowItWorks => "how-it-works",
            Self::Security => "security",
        }
    }

    /// Height of the divider viewBox.
    pub fn viewbox_height(self) -> f64 {
        match self {
            Self::Security => 170.0,
            _ => 190.0,
        }
    }
}

impl std::str::FromStr for DividerVariant {
    type Err = crate::foundation::error::MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| {
                crate::foundation::error::MotionError::validation(format!(
                    "unknown divider variant '{s}'"
                ))
            })
    }
}

/// Breakpoint-dependent shrink of the divider travel on narrow screens.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Responsive {
    pub curve_scale: f64,
    pub wave_height: f64,
}

impl Responsive {
    pub fn for_width(viewport_width: f64) -> Self {
        let curve_scale = if viewport_width <= 600.0 {
            0.46
        } else if viewport_width <= 980.0 {
            0.62
        } else {
            1.0
        };
        let wave_height = if curve_scale < 0.7 { 160.0 } else { 190.0 };
        Self {
            curve_scale,
            wave_height,
        }
    }
}

impl Default for Responsive {
    fn default() -> Self {
        Self {
            curve_scale: 1.0,
            wave_height: 190.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/divider.rs"]
mod tests;
