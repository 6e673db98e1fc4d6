use std::fmt::Write as _;

use crate::foundation::core::{BezPath, Point};

/// Cubic segment `(c1, c2, end)` for each consecutive pair of points.
///
/// Control points follow the Catmull-Rom tangents scaled by 1/6; end points reuse themselves as
/// the missing neighbour.
fn segments(points: &[Point]) -> impl Iterator<Item = (Point, Point, Point)> + '_ {
    (0..points.len().saturating_sub(1)).map(move |i| {
        let p1 = points[i];
        let p2 = points[i + 1];
        let p0 = if i == 0 { p1 } else { points[i - 1] };
        let p3 = points.get(i + 2).copied().unwrap_or(p2);
        let c1 = Point::new(p1.x + (p2.x - p0.x) / 6.0, p1.y + (p2.y - p0.y) / 6.0);
        let c2 = Point::new(p2.x - (p3.x - p1.x) / 6.0, p2.y - (p3.y - p1.y) / 6.0);
        (c1, c2, p2)
    })
}

/// SVG path data for a smooth line through `points`.
///
/// Fewer than two points yield an empty string, exactly two a straight `L` segment.
pub fn smooth_path(points: &[Point]) -> String {
    match points {
        [] | [_] => String::new(),
        [a, b] => format!("M{} {} L{} {}", a.x, a.y, b.x, b.y),
        [first, ..] => {
            let mut d = format!("M{} {}", first.x, first.y);
            for (c1, c2, p) in segments(points) {
                let _ = write!(d, " C{} {} {} {} {} {}", c1.x, c1.y, c2.x, c2.y, p.x, p.y);
            }
            d
        }
    }
}

/// Same curve as [`smooth_path`] as a [`BezPath`].
pub fn smooth_bezpath(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    match points {
        [] | [_] => {}
        [a, b] => {
            path.move_to(*a);
            path.line_to(*b);
        }
        [first, ..] => {
            path.move_to(*first);
            for (c1, c2, p) in segments(points) {
                path.curve_to(c1, c2, p);
            }
        }
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/curve/smooth.rs"]
mod tests;
