use crate::foundation::core::{ElementRect, Millis, Viewport};
use crate::foundation::math::clamp;

/// Intersection test against the viewport, shrunk at the bottom by a root margin.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntersectionWatch {
    /// Minimum visible fraction of the element.
    pub threshold: f64,
    /// Fraction of the viewport height cut from the bottom of the root box.
    pub bottom_margin: f64,
}

impl IntersectionWatch {
    pub const fn new(threshold: f64, bottom_margin: f64) -> Self {
        Self {
            threshold,
            bottom_margin,
        }
    }

    /// Visible fraction of `rect` inside the (margin-adjusted) viewport.
    pub fn ratio(&self, rect: ElementRect, viewport: Viewport) -> f64 {
        let root_bottom = viewport.height * (1.0 - self.bottom_margin);
        let top = rect.top.max(0.0);
        let bottom = rect.bottom().min(root_bottom);
        if rect.height <= 0.0 {
            return if rect.top >= 0.0 && rect.top <= root_bottom {
                1.0
            } else {
                0.0
            };
        }
        clamp((bottom - top) / rect.height, 0.0, 1.0)
    }

    pub fn is_intersecting(&self, rect: ElementRect, viewport: Viewport) -> bool {
        let r = self.ratio(rect, viewport);
        r > 0.0 && r >= self.threshold
    }
}

/// Observer presets used by the site's sections.
pub mod presets {
    use super::IntersectionWatch;

    pub const COPILOT: IntersectionWatch = IntersectionWatch::new(0.12, 0.28);
    pub const DASHBOARD: IntersectionWatch = IntersectionWatch::new(0.28, 0.24);
    pub const PLAN: IntersectionWatch = IntersectionWatch::new(0.22, 0.18);
    pub const CUSTOMERS: IntersectionWatch = IntersectionWatch::new(0.3, 0.24);
    pub const HOW_IT_WORKS: IntersectionWatch = IntersectionWatch::new(0.24, 0.08);
    pub const REVEAL: IntersectionWatch = IntersectionWatch::new(0.18, 0.1);
}

/// How a latch reacts once the element has been seen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LatchMode {
    /// Stays visible forever after the first intersection.
    Sticky,
    /// Mirrors the current intersection state.
    Live,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LatchState {
    Hidden,
    Pending { elapsed: Millis },
    Visible,
}

/// Visibility flag for one section, fed by scroll events and timer ticks.
#[derive(Clone, Debug)]
pub struct VisibilityLatch {
    watch: IntersectionWatch,
    mode: LatchMode,
    delay: Millis,
    state: LatchState,
}

impl VisibilityLatch {
    pub fn sticky(watch: IntersectionWatch) -> Self {
        Self {
            watch,
            mode: LatchMode::Sticky,
            delay: Millis::ZERO,
            state: LatchState::Hidden,
        }
    }

    pub fn live(watch: IntersectionWatch) -> Self {
        Self {
            mode: LatchMode::Live,
            ..Self::sticky(watch)
        }
    }

    /// Sticky latch that turns visible `delay` after the first intersection.
    pub fn reveal(watch: IntersectionWatch, delay: Millis) -> Self {
        Self {
            delay,
            ..Self::sticky(watch)
        }
    }

    /// Reveal-section preset: 140 ms after crossing the reveal threshold.
    pub fn reveal_section() -> Self {
        Self::reveal(presets::REVEAL, Millis(140))
    }

    pub fn mode(&self) -> LatchMode {
        self.mode
    }

    pub fn is_visible(&self) -> bool {
        self.state == LatchState::Visible
    }

    /// Feed an observation. Returns the new visibility when it flipped.
    pub fn observe(&mut self, rect: Option<ElementRect>, viewport: Viewport) -> Option<bool> {
        let rect = rect?;
        let hit = self.watch.is_intersecting(rect, viewport);
        let before = self.is_visible();
        self.state = match (self.mode, self.state, hit) {
            (LatchMode::Sticky, LatchState::Visible, _) => LatchState::Visible,
            (_, LatchState::Pending { elapsed }, true) => LatchState::Pending { elapsed },
            (_, _, true) if self.delay > Millis::ZERO => LatchState::Pending {
                elapsed: Millis::ZERO,
            },
            (_, _, true) => LatchState::Visible,
            (LatchMode::Sticky, LatchState::Pending { elapsed }, false) => {
                LatchState::Pending { elapsed }
            }
            (_, _, false) => LatchState::Hidden,
        };
        self.changed(before)
    }

    /// Advance the reveal delay. Returns `Some(true)` when the element just became visible.
    pub fn advance(&mut self, dt: Millis) -> Option<bool> {
        let LatchState::Pending { elapsed } = self.state else {
            return None;
        };
        let elapsed = elapsed.saturating_add(dt);
        let before = self.is_visible();
        self.state = if elapsed >= self.delay {
            LatchState::Visible
        } else {
            LatchState::Pending { elapsed }
        };
        self.changed(before)
    }

    fn changed(&self, before: bool) -> Option<bool> {
        let now = self.is_visible();
        if now == before {
            return None;
        }
        tracing::debug!(visible = now, mode = ?self.mode, "section visibility");
        Some(now)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/visibility.rs"]
mod tests;
