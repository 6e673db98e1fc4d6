//! Backend-agnostic draw lists and their rasterizers.
//!
//! Backdrops emit a [`DrawList`] in CSS pixels; [`cpu::CpuRasterizer`] turns it into a
//! premultiplied [`FrameRGBA`] at device resolution. Dividers either become a draw list
//! through [`divider`] or SVG markup rasterized by [`svg`] and `resvg`.

pub mod backend;
pub mod cpu;
pub mod divider;
pub mod svg;

pub use backend::{
    BackendKind, DrawList, DrawOp, FrameRGBA, GradientStop, RenderBackend, create_backend,
};
pub use cpu::{CpuRasterizer, RasterOpts};
pub use divider::{DividerPaint, divider_draw_list};
