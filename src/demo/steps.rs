use crate::foundation::core::Millis;
use crate::foundation::math::clamp;

pub const LOOP_MS: u64 = 7600;
pub const TRAVEL_START: f64 = 0.018;
pub const TRAVEL_END: f64 = 0.982;
/// Smallest progress change worth re-rendering the particle for.
pub const PROGRESS_EPSILON: f64 = 0.0025;

/// Changes produced by one [`StepLoop::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct StepUpdate {
    pub progress: Option<f64>,
    /// `Some(new_active)` when the active step changed.
    pub active: Option<Option<usize>>,
}

/// Looping particle that travels along the "how it works" steps and lights each one up.
#[derive(Clone, Debug)]
pub struct StepLoop {
    loop_ms: u64,
    thresholds: Vec<f64>,
    elapsed: Millis,
    last_progress: f64,
    active: Option<usize>,
}

impl StepLoop {
    pub fn new(thresholds: Vec<f64>) -> Self {
        Self {
            loop_ms: LOOP_MS,
            thresholds,
            elapsed: Millis::ZERO,
            last_progress: -1.0,
            active: None,
        }
    }

    /// Thresholds from step-circle centers measured in the grid's coordinate space.
    ///
    /// A zero-width grid yields no thresholds, so no step ever lights up.
    pub fn from_layout(grid_left: f64, grid_width: f64, step_centers: &[f64]) -> Self {
        Self::new(thresholds_from_layout(grid_left, grid_width, step_centers))
    }

    pub fn set_thresholds(&mut self, thresholds: Vec<f64>) {
        self.thresholds = thresholds;
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Progress through the current loop, in `[0, 1)`.
    pub fn progress(&self) -> f64 {
        (self.elapsed.0 % self.loop_ms) as f64 / self.loop_ms as f64
    }

    /// Back to the start, as when the section leaves the viewport.
    pub fn reset(&mut self) {
        self.elapsed = Millis::ZERO;
        self.last_progress = -1.0;
        self.active = None;
    }

    pub fn tick(&mut self, dt: Millis) -> StepUpdate {
        self.elapsed = Millis(self.elapsed.saturating_add(dt).0 % self.loop_ms);
        let p = self.progress();
        let mut update = StepUpdate::default();

        if (p - self.last_progress).abs() > PROGRESS_EPSILON {
            self.last_progress = p;
            update.progress = Some(p);
        }

        let next = self.thresholds.iter().rposition(|&t| p >= t);
        if next != self.active {
            tracing::trace!(step = ?next, "active step");
            self.active = next;
            update.active = Some(next);
        }
        update
    }
}

pub fn thresholds_from_layout(grid_left: f64, grid_width: f64, step_centers: &[f64]) -> Vec<f64> {
    if grid_width <= 0.0 || !grid_width.is_finite() {
        return Vec::new();
    }
    let range = TRAVEL_END - TRAVEL_START;
    step_centers
        .iter()
        .map(|&cx| clamp(((cx - grid_left) / grid_width - TRAVEL_START) / range, 0.0, 1.0))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/demo/steps.rs"]
mod tests;
