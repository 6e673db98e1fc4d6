use crate::curve::divider::{DividerCurve, VIEWBOX_WIDTH};
use crate::foundation::error::{MotionError, MotionResult};
use crate::render::backend::FrameRGBA;

/// Appearance of a rendered divider.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DividerSvgOpts {
    pub viewbox_height: f64,
    /// Fill below the curve (the next section's background).
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for DividerSvgOpts {
    fn default() -> Self {
        Self {
            viewbox_height: 190.0,
            fill: "#0b0e1a".to_owned(),
            stroke: "#535aff".to_owned(),
            stroke_width: 2.0,
        }
    }
}

/// Standalone SVG document for `curve`: filled region below plus the stroked edge.
pub fn divider_svg(curve: &DividerCurve, opts: &DividerSvgOpts) -> String {
    let h = opts.viewbox_height;
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" "#,
            r#"width="{w}" height="{h}" preserveAspectRatio="none">"#,
            r#"<path d="{fill_d}" fill="{fill}"/>"#,
            r#"<path d="{edge_d}" fill="none" stroke="{stroke}" stroke-width="{sw}"/>"#,
            "</svg>"
        ),
        w = VIEWBOX_WIDTH,
        h = h,
        fill_d = curve.to_fill_bezpath(h).to_svg(),
        edge_d = curve.to_bezpath().to_svg(),
        fill = opts.fill,
        stroke = opts.stroke,
        sw = opts.stroke_width,
    )
}

/// Rasterize `svg` (stretched, like `preserveAspectRatio="none"`) into a `width`×`height` frame.
#[tracing::instrument(skip(svg))]
pub fn rasterize_svg(svg: &str, width: u32, height: u32) -> MotionResult<FrameRGBA> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .map_err(|e| MotionError::render(format!("svg parse failed: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| MotionError::render("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(&tree, xform, &mut pixmap.as_mut());
    Ok(FrameRGBA {
        width,
        height,
        data: pixmap.data().to_vec(),
        premultiplied: true,
    })
}

/// [`divider_svg`] followed by [`rasterize_svg`].
pub fn rasterize_divider(
    curve: &DividerCurve,
    opts: &DividerSvgOpts,
    width: u32,
    height: u32,
) -> MotionResult<FrameRGBA> {
    rasterize_svg(&divider_svg(curve, opts), width, height)
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
