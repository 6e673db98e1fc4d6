//! Divider curves as draw lists, so the CPU rasterizer can paint them without an SVG round trip.

use kurbo::PathEl;

use crate::curve::divider::{DividerCurve, VIEWBOX_WIDTH};
use crate::foundation::core::{BezPath, Point, Rgba, SurfaceSize};
use crate::render::backend::DrawList;

/// Flattening tolerance in viewBox units.
const FLATTEN_TOLERANCE: f64 = 0.25;

/// Colors and stroke of a painted divider.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DividerPaint {
    pub viewbox_height: f64,
    /// Fill below the curve.
    pub fill: Rgba,
    pub stroke: Rgba,
    /// Edge width in CSS px; not stretched with the viewBox.
    pub stroke_width: f64,
}

impl Default for DividerPaint {
    fn default() -> Self {
        Self {
            viewbox_height: 190.0,
            fill: Rgba::new(11, 14, 26, 1.0),
            stroke: Rgba::new(83, 90, 255, 1.0),
            stroke_width: 2.0,
        }
    }
}

fn flatten(path: &BezPath) -> Vec<Point> {
    let mut points = Vec::new();
    kurbo::flatten(path.elements().iter().copied(), FLATTEN_TOLERANCE, |el| {
        if let PathEl::MoveTo(p) | PathEl::LineTo(p) = el {
            points.push(p);
        }
    });
    points
}

/// Fill polygon under `curve` plus its edge as line segments, stretched over `size` the way
/// `preserveAspectRatio="none"` stretches the SVG.
pub fn divider_draw_list(
    curve: &DividerCurve,
    paint: &DividerPaint,
    size: SurfaceSize,
) -> DrawList {
    let sx = size.width / VIEWBOX_WIDTH;
    let sy = size.height / paint.viewbox_height;
    let to_css = |p: Point| Point::new(p.x * sx, p.y * sy);

    let mut list = DrawList::new(size);
    let fill: Vec<Point> = flatten(&curve.to_fill_bezpath(paint.viewbox_height))
        .into_iter()
        .map(to_css)
        .collect();
    list.polygon(fill, paint.fill);

    let edge: Vec<Point> = flatten(&curve.to_bezpath()).into_iter().map(to_css).collect();
    for seg in edge.windows(2) {
        list.line(seg[0], seg[1], paint.stroke_width, paint.stroke);
    }
    tracing::trace!(ops = list.len(), "divider draw list");
    list
}

#[cfg(test)]
#[path = "../../tests/unit/render/divider.rs"]
mod tests;
