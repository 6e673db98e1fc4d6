//! Section divider curves and smooth chart lines.
//!
//! Dividers are two joined cubic Beziers across a 1440-unit wide viewBox. The same sampler feeds
//! the CSS `clip-path` polygon and the SVG stroke so the fill edge and the drawn line always agree.

pub mod divider;
pub mod smooth;

pub use divider::{CurveProfile, CurveSample, DividerCurve, DividerVariant, Responsive};
pub use smooth::smooth_path;
