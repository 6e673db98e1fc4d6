use crate::foundation::core::{Point, Rect, Rgba, SurfaceSize};
use crate::foundation::error::MotionResult;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are premultiplied alpha by default; the flag keeps that explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in device pixels.
    pub width: u32,
    /// Frame height in device pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Copy with straight (unpremultiplied) alpha, as PNG encoders expect.
    pub fn to_straight(&self) -> Self {
        if !self.premultiplied {
            return self.clone();
        }
        let mut data = self.data.clone();
        for px in data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                px[..3].fill(0);
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        Self {
            data,
            premultiplied: false,
            ..*self
        }
    }

    /// Number of pixels with non-zero alpha.
    pub fn covered_pixels(&self) -> usize {
        self.data.chunks_exact(4).filter(|px| px[3] != 0).count()
    }
}

/// Color stop of a [`DrawOp::VerticalGradient`]; `offset` is in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba,
}

impl GradientStop {
    pub const fn new(offset: f64, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Straight-alpha color at `t` along sorted `stops`, clamped at both ends.
pub fn sample_stops(stops: &[GradientStop], t: f64) -> Rgba {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Rgba::new(0, 0, 0, 0.0);
    };
    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }
    for w in stops.windows(2) {
        let (a, b) = (w[0], w[1]);
        if t >= a.offset && t <= b.offset {
            let span = b.offset - a.offset;
            let k = if span <= 0.0 { 1.0 } else { (t - a.offset) / span };
            let mix = |x: u8, y: u8| -> u8 {
                (f64::from(x) + (f64::from(y) - f64::from(x)) * k)
                    .round()
                    .clamp(0.0, 255.0) as u8
            };
            return Rgba::new(
                mix(a.color.r, b.color.r),
                mix(a.color.g, b.color.g),
                mix(a.color.b, b.color.b),
                a.color.a + (b.color.a - a.color.a) * k,
            );
        }
    }
    last.color
}

/// One drawing command in CSS pixel space.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    /// `rect` filled with a gradient running from `y0` to `y1` (canvas `createLinearGradient`
    /// semantics: colors clamp outside that span).
    VerticalGradient {
        rect: Rect,
        y0: f64,
        y1: f64,
        stops: Vec<GradientStop>,
    },
    Circle {
        center: Point,
        radius: f64,
        color: Rgba,
    },
    Line {
        from: Point,
        to: Point,
        width: f64,
        color: Rgba,
    },
    Polygon {
        points: Vec<Point>,
        color: Rgba,
    },
}

/// Ordered draw commands for one frame plus the surface they target.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrawList {
    pub size: SurfaceSize,
    pub ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.push(DrawOp::FillRect { rect, color });
    }

    /// Adds a circle unless it is invisible.
    pub fn circle(&mut self, center: Point, radius: f64, color: Rgba) {
        if radius <= 0.0 || color.a <= 0.0 {
            return;
        }
        self.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    pub fn line(&mut self, from: Point, to: Point, width: f64, color: Rgba) {
        if color.a <= 0.0 {
            return;
        }
        self.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
    }

    /// Adds a filled polygon unless it is degenerate or invisible.
    pub fn polygon(&mut self, points: Vec<Point>, color: Rgba) {
        if points.len() < 3 || color.a <= 0.0 {
            return;
        }
        self.push(DrawOp::Polygon { points, color });
    }

    pub fn circle_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count()
    }
}

/// A rasterizer for [`DrawList`]s.
pub trait RenderBackend {
    /// Rasterize `list` into a frame at device resolution.
    fn render(&mut self, list: &DrawList) -> MotionResult<FrameRGBA>;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    #[default]
    Cpu,
}

/// Create a rendering backend implementation.
pub fn create_backend(
    kind: BackendKind,
    opts: crate::render::cpu::RasterOpts,
) -> MotionResult<Box<dyn RenderBackend>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuRasterizer::new(opts))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
