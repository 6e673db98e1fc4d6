use super::*;
use crate::render::backend::{DrawOp, RenderBackend};
use crate::render::cpu::CpuRasterizer;
use crate::render::svg::{DividerSvgOpts, rasterize_divider};

fn size(w: f64, h: f64) -> SurfaceSize {
    SurfaceSize::new(w, h, 1.0).unwrap()
}

#[test]
fn fill_polygon_spans_the_surface() {
    let curve = DividerCurve::new(78.0, 14.0);
    let list = divider_draw_list(
        &curve,
        &DividerPaint {
            viewbox_height: 170.0,
            ..DividerPaint::default()
        },
        size(720.0, 85.0),
    );
    let DrawOp::Polygon { points, .. } = &list.ops[0] else {
        panic!("first op should be the fill polygon");
    };
    assert_eq!(points[0], Point::new(0.0, 39.0));
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    assert_eq!(xs.iter().cloned().fold(f64::MAX, f64::min), 0.0);
    assert_eq!(xs.iter().cloned().fold(f64::MIN, f64::max), 720.0);
    assert!(points.iter().any(|p| p.y == 85.0));
    assert!(list.len() > 2);
    assert!(
        list.ops[1..]
            .iter()
            .all(|op| matches!(op, DrawOp::Line { .. }))
    );
}

#[test]
fn cpu_raster_fills_below_the_curve_only() {
    let curve = DividerCurve::new(80.0, 80.0);
    let list = divider_draw_list(&curve, &DividerPaint::default(), size(144.0, 19.0));
    let frame = CpuRasterizer::default().render(&list).unwrap();
    let alpha = |x: usize, y: usize| frame.data[(y * 144 + x) * 4 + 3];
    assert_eq!(alpha(72, 1), 0);
    assert_eq!(alpha(72, 17), 255);
}

#[test]
fn cpu_and_svg_rasters_agree_away_from_the_edge() {
    // Edge spans rows 12..24, clear of the rows compared below.
    let curve = DividerCurve::new(120.0, 60.0);
    let (w, h) = (288usize, 38usize);
    let cpu = CpuRasterizer::default()
        .render(&divider_draw_list(
            &curve,
            &DividerPaint::default(),
            size(w as f64, h as f64),
        ))
        .unwrap();
    let svg = rasterize_divider(&curve, &DividerSvgOpts::default(), w as u32, h as u32).unwrap();
    for x in (0..w).step_by(8) {
        for y in [0usize, 5, 30, h - 1] {
            let i = (y * w + x) * 4 + 3;
            assert_eq!(cpu.data[i], svg.data[i], "alpha differs at ({x}, {y})");
        }
    }
}
