use crate::foundation::core::Millis;

pub const RESET_MS: u64 = 90;
pub const ANIMATE_AFTER_MS: u64 = 220;
pub const UPDATING_MS: u64 = 260;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct PulseFlags {
    /// Line snapped back to its start for the redraw.
    pub resetting: bool,
    /// Line drawing animation running (stays on until the next trigger).
    pub animating: bool,
    /// Panel dimmed while new numbers settle.
    pub updating: bool,
}

/// Refresh pulse for a chart panel, retriggered whenever its data or visibility changes.
#[derive(Clone, Debug, Default)]
pub struct ChartPulse {
    since_trigger: Option<Millis>,
}

impl ChartPulse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags(&self) -> PulseFlags {
        let Some(t) = self.since_trigger else {
            return PulseFlags::default();
        };
        PulseFlags {
            resetting: t.0 < RESET_MS,
            animating: t.0 >= ANIMATE_AFTER_MS,
            updating: t.0 < UPDATING_MS,
        }
    }

    /// Restart the pulse. Returns the flags right after the restart.
    pub fn trigger(&mut self) -> PulseFlags {
        self.since_trigger = Some(Millis::ZERO);
        self.flags()
    }

    /// Advance time. Returns new flags when any of them changed.
    pub fn advance(&mut self, dt: Millis) -> Option<PulseFlags> {
        let t = self.since_trigger?;
        let before = self.flags();
        self.since_trigger = Some(t.saturating_add(dt));
        let after = self.flags();
        (after != before).then_some(after)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/charts/pulse.rs"]
mod tests;
