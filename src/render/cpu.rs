use vello_cpu::kurbo::Shape as _;

use crate::foundation::core::{BezPath, Point, Rgba};
use crate::foundation::error::{MotionError, MotionResult};
use crate::render::backend::{DrawList, DrawOp, FrameRGBA, RenderBackend, sample_stops};

/// Options for [`CpuRasterizer`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RasterOpts {
    /// Straight-alpha RGBA8 background painted before the draw list. `None` keeps transparency.
    pub clear_rgba: Option<[u8; 4]>,
    /// Flattening tolerance for circles, in device pixels.
    pub tolerance: f64,
}

impl Default for RasterOpts {
    fn default() -> Self {
        Self {
            clear_rgba: None,
            tolerance: 0.1,
        }
    }
}

/// CPU rasterizer powered by `vello_cpu`.
#[derive(Clone, Debug, Default)]
pub struct CpuRasterizer {
    opts: RasterOpts,
}

impl CpuRasterizer {
    pub fn new(opts: RasterOpts) -> Self {
        Self { opts }
    }

    pub fn opts(&self) -> &RasterOpts {
        &self.opts
    }
}

impl RenderBackend for CpuRasterizer {
    #[tracing::instrument(skip(self, list), fields(ops = list.ops.len()))]
    fn render(&mut self, list: &DrawList) -> MotionResult<FrameRGBA> {
        let (width, height) = list.size.device_px();
        let w: u16 = width
            .try_into()
            .map_err(|_| MotionError::render("surface width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| MotionError::render("surface height exceeds u16"))?;
        let dpr = list.size.dpr;

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        let mut pixmap = vello_cpu::Pixmap::new(w, h);

        if let Some([r, g, b, a]) = self.opts.clear_rgba {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(w),
                f64::from(h),
            ));
        }

        for op in &list.ops {
            draw_op(&mut ctx, op, dpr, self.opts.tolerance);
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width,
            height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn set_color(ctx: &mut vello_cpu::RenderContext, color: Rgba) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r,
        color.g,
        color.b,
        color.alpha_u8(),
    ));
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, op: &DrawOp, dpr: f64, tolerance: f64) {
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    let css_to_device = vello_cpu::kurbo::Affine::scale(dpr);

    match op {
        DrawOp::FillRect { rect, color } => {
            ctx.set_transform(css_to_device);
            set_color(ctx, *color);
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                rect.x0, rect.y0, rect.x1, rect.y1,
            ));
        }
        DrawOp::VerticalGradient {
            rect,
            y0,
            y1,
            stops,
        } => {
            // One solid row per device pixel, colors sampled at the row center.
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            let top = (rect.y0 * dpr).floor().max(0.0) as i64;
            let bottom = (rect.y1 * dpr).ceil() as i64;
            let (x0, x1) = (rect.x0 * dpr, rect.x1 * dpr);
            let span = y1 - y0;
            for row in top..bottom {
                let y_css = (row as f64 + 0.5) / dpr;
                let t = if span == 0.0 { 0.0 } else { (y_css - y0) / span };
                let color = sample_stops(stops, t);
                if color.alpha_u8() == 0 {
                    continue;
                }
                set_color(ctx, color);
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    x0,
                    row as f64,
                    x1,
                    (row + 1) as f64,
                ));
            }
        }
        DrawOp::Circle {
            center,
            radius,
            color,
        } => {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            set_color(ctx, *color);
            let circle = vello_cpu::kurbo::Circle::new(
                (center.x * dpr, center.y * dpr),
                radius * dpr,
            );
            ctx.fill_path(&circle.to_path(tolerance));
        }
        DrawOp::Line {
            from,
            to,
            width,
            color,
        } => {
            ctx.set_transform(css_to_device);
            set_color(ctx, *color);
            ctx.fill_path(&bezpath_to_cpu(&line_quad(*from, *to, *width)));
        }
        DrawOp::Polygon { points, color } => {
            if points.len() < 3 {
                return;
            }
            ctx.set_transform(css_to_device);
            set_color(ctx, *color);
            ctx.fill_path(&bezpath_to_cpu(&polygon_path(points)));
        }
    }
}

/// Butt-capped stroke of width `width` as a closed quad.
fn line_quad(from: Point, to: Point, width: f64) -> BezPath {
    let d = to - from;
    let len = d.hypot();
    let mut path = BezPath::new();
    if len == 0.0 {
        return path;
    }
    let n = crate::foundation::core::Vec2::new(-d.y / len, d.x / len) * (width / 2.0);
    path.move_to(from + n);
    path.line_to(to + n);
    path.line_to(to - n);
    path.line_to(from - n);
    path.close_path();
    path
}

fn polygon_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut it = points.iter();
    if let Some(first) = it.next() {
        path.move_to(*first);
        for p in it {
            path.line_to(*p);
        }
        path.close_path();
    }
    path
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

pub(crate) fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
