use crate::foundation::error::{MotionError, MotionResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Wall-clock duration or timestamp in whole milliseconds.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    /// Zero duration.
    pub const ZERO: Self = Self(0);

    /// Convert to fractional seconds.
    pub fn as_secs_f64(self) -> f64 {
        (self.0 as f64) / 1000.0
    }

    /// Saturating addition.
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Saturating subtraction.
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

/// Browser viewport as seen by scroll/resize handlers.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Inner width in CSS pixels.
    pub width: f64,
    /// Inner height in CSS pixels.
    pub height: f64,
    /// Vertical document scroll offset in CSS pixels.
    #[serde(default)]
    pub scroll_y: f64,
}

impl Viewport {
    /// Create a viewport at the top of the document.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_y: 0.0,
        }
    }

    /// Same viewport scrolled to `scroll_y`.
    pub fn scrolled_to(self, scroll_y: f64) -> Self {
        Self { scroll_y, ..self }
    }
}

/// Element bounding box relative to the viewport (`getBoundingClientRect` semantics).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementRect {
    /// Distance from viewport top to element top; negative once scrolled past.
    pub top: f64,
    /// Distance from viewport left to element left.
    pub left: f64,
    /// Element width.
    pub width: f64,
    /// Element height.
    pub height: f64,
}

impl ElementRect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Bottom edge in viewport space.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Rect for an element whose document offset is `offset_top`, as seen from `viewport`.
    pub fn from_document_offset(offset_top: f64, height: f64, viewport: Viewport) -> Self {
        Self {
            top: offset_top - viewport.scroll_y,
            left: 0.0,
            width: viewport.width,
            height,
        }
    }
}

/// Drawing surface in CSS pixels plus device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
    /// Device pixel ratio, capped at [`SurfaceSize::MAX_DPR`].
    pub dpr: f64,
}

impl SurfaceSize {
    /// Highest device pixel ratio backdrops render at.
    pub const MAX_DPR: f64 = 2.0;

    /// Create a validated size. `dpr` values above 2 are capped, non-positive ones become 1.
    ///
    /// The device-pixel size must fit the rasterizer's `u16` surface dimensions.
    pub fn new(width: f64, height: f64, dpr: f64) -> MotionResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(MotionError::validation(
                "surface width/height must be finite and > 0",
            ));
        }
        let dpr = if dpr.is_finite() && dpr > 0.0 {
            dpr.min(Self::MAX_DPR)
        } else {
            1.0
        };
        let max = f64::from(u16::MAX);
        if (width * dpr).round() > max || (height * dpr).round() > max {
            return Err(MotionError::validation(format!(
                "surface {width}x{height} at dpr {dpr} exceeds {max} device px"
            )));
        }
        Ok(Self { width, height, dpr })
    }

    /// Backing-store size in device pixels.
    pub fn device_px(&self) -> (u32, u32) {
        (
            (self.width * self.dpr).round().max(1.0) as u32,
            (self.height * self.dpr).round().max(1.0) as u32,
        )
    }
}

/// Straight-alpha RGBA color with a floating-point alpha, the way canvas `rgba()` strings work.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha multiplied by `k` (clamped into `[0, 1]`).
    pub fn fade(self, k: f64) -> Self {
        Self {
            a: (self.a * k).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Alpha as an 8-bit channel.
    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
