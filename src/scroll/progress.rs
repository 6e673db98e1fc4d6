use crate::foundation::core::{ElementRect, Viewport};
use crate::foundation::math::clamp;

/// Viewport-relative window an element travels through while its progress goes from 0 to 1.
///
/// `start` and `end` are fractions of the viewport height measured from the viewport top. Progress
/// is 0 while the element top is below `start * height` and reaches 1 once it rises to
/// `end * height`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollWindow {
    pub start: f64,
    pub end: f64,
}

impl ScrollWindow {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Progress for an element whose viewport-relative top is `element_top`.
    pub fn progress(&self, element_top: f64, viewport_height: f64) -> f64 {
        let start = viewport_height * self.start;
        let end = viewport_height * self.end;
        let span = start - end;
        if span == 0.0 || !span.is_finite() {
            return if element_top <= start { 1.0 } else { 0.0 };
        }
        let p = (start - element_top) / span;
        if p.is_nan() {
            return 0.0;
        }
        clamp(p, 0.0, 1.0)
    }
}

/// Named windows used by the site's sections.
pub mod presets {
    use super::{DocumentTrigger, ScrollWindow};

    pub const COPILOT: ScrollWindow = ScrollWindow::new(0.84, 0.36);
    pub const DASHBOARD: ScrollWindow = ScrollWindow::new(0.9, 0.42);
    pub const PLAN: ScrollWindow = ScrollWindow::new(1.12, 0.58);
    pub const CUSTOMERS: ScrollWindow = ScrollWindow::new(1.35, 0.74);
    pub const SECTION_BREAK: ScrollWindow = ScrollWindow::new(1.08, 0.46);
    pub const SOLUTIONS: ScrollWindow = ScrollWindow::new(0.9, 0.42);
    pub const HOW_IT_WORKS: DocumentTrigger = DocumentTrigger::new(0.95, 0.72);
}

/// Tracks one element's progress across scroll and resize events.
///
/// Call [`ProgressTracker::update`] from the (passive) scroll and resize handlers. A return of
/// `Some(p)` is the new value to store; `None` means nothing changed or the element is not
/// mounted yet.
#[derive(Clone, Debug)]
pub struct ProgressTracker {
    window: ScrollWindow,
    hold_until_near: bool,
    progress: f64,
}

impl ProgressTracker {
    pub fn new(window: ScrollWindow) -> Self {
        Self {
            window,
            hold_until_near: false,
            progress: 0.0,
        }
    }

    /// Keep progress at 0 while the element is still entirely below the viewport.
    pub fn hold_until_near(mut self) -> Self {
        self.hold_until_near = true;
        self
    }

    pub fn window(&self) -> ScrollWindow {
        self.window
    }

    /// Last computed progress.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Recompute progress for `rect`; `None` rects (unmounted element) are skipped.
    pub fn update(&mut self, rect: Option<ElementRect>, viewport: Viewport) -> Option<f64> {
        let rect = rect?;
        let next = if self.hold_until_near && rect.top >= viewport.height {
            0.0
        } else {
            self.window.progress(rect.top, viewport.height)
        };
        if next == self.progress {
            return None;
        }
        tracing::trace!(from = self.progress, to = next, "scroll progress");
        self.progress = next;
        Some(next)
    }
}

/// Progress derived from the element's document offset instead of its viewport rect.
///
/// The trigger line sits `early_offset * vh` above the element, and progress runs over
/// `range * vh` of scrolling measured at the viewport bottom.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DocumentTrigger {
    pub early_offset: f64,
    pub range: f64,
}

impl DocumentTrigger {
    pub const fn new(early_offset: f64, range: f64) -> Self {
        Self {
            early_offset,
            range,
        }
    }

    pub fn progress(&self, offset_top: f64, viewport: Viewport) -> f64 {
        let viewport_bottom = viewport.scroll_y + viewport.height;
        let trigger_start = offset_top - viewport.height * self.early_offset;
        let range = viewport.height * self.range;
        if range <= 0.0 {
            return if viewport_bottom >= trigger_start { 1.0 } else { 0.0 };
        }
        clamp((viewport_bottom - trigger_start) / range, 0.0, 1.0)
    }
}

/// How far a pinned section (the hero) has been scrolled past: `-top / height`.
pub fn pinned_progress(rect: ElementRect) -> f64 {
    if rect.height <= 0.0 {
        return 0.0;
    }
    clamp(-rect.top / rect.height, 0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/progress.rs"]
mod tests;
