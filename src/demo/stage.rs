use crate::foundation::core::Millis;
use crate::foundation::error::{MotionError, MotionResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoStage {
    #[default]
    Idle,
    Typing,
    Sending,
    Loading,
    Answer,
    Chart,
}

impl DemoStage {
    /// Stage that follows `self` within one example. `Chart` and `Idle` have no successor.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Typing => Some(Self::Sending),
            Self::Sending => Some(Self::Loading),
            Self::Loading => Some(Self::Answer),
            Self::Answer => Some(Self::Chart),
            Self::Chart | Self::Idle => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Typing => "typing",
            Self::Sending => "sending",
            Self::Loading => "loading",
            Self::Answer => "answer",
            Self::Chart => "chart",
        }
    }
}

/// Per-stage durations of one demo cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StageTimings {
    /// Delay between revealed characters.
    pub typing_tick_ms: u64,
    /// Pause after the last character before sending.
    pub typing_hold_ms: u64,
    pub sending_ms: u64,
    pub loading_ms: u64,
    pub answer_ms: u64,
    pub chart_ms: u64,
}

impl Default for StageTimings {
    fn default() -> Self {
        Self::copilot()
    }
}

impl StageTimings {
    /// Home page copilot: 6.9 s dwell after typing.
    pub const fn copilot() -> Self {
        Self {
            typing_tick_ms: 34,
            typing_hold_ms: 0,
            sending_ms: 460,
            loading_ms: 1150,
            answer_ms: 800,
            chart_ms: 4490,
        }
    }

    /// Solution-page scenario card.
    pub const fn scenario() -> Self {
        Self {
            typing_tick_ms: 24,
            typing_hold_ms: 120,
            sending_ms: 460,
            loading_ms: 1440,
            answer_ms: 400,
            chart_ms: 2800,
        }
    }

    pub fn validate(&self) -> MotionResult<()> {
        if self.typing_tick_ms == 0 {
            return Err(MotionError::validation("typing_tick_ms must be > 0"));
        }
        let tail = self
            .typing_hold_ms
            .saturating_add(self.sending_ms)
            .saturating_add(self.loading_ms)
            .saturating_add(self.answer_ms)
            .saturating_add(self.chart_ms);
        if tail == 0 {
            return Err(MotionError::validation(
                "stage durations after typing must not all be zero",
            ));
        }
        Ok(())
    }

    /// Time spent typing a question of `chars` characters, hold included.
    pub fn typing_duration(&self, chars: usize) -> Millis {
        Millis(
            (chars as u64)
                .saturating_mul(self.typing_tick_ms)
                .saturating_add(self.typing_hold_ms),
        )
    }

    /// Duration of `stage` for a question of `chars` characters. `Idle` never ends on its own.
    pub fn duration(&self, stage: DemoStage, chars: usize) -> Option<Millis> {
        match stage {
            DemoStage::Idle => None,
            DemoStage::Typing => Some(self.typing_duration(chars)),
            DemoStage::Sending => Some(Millis(self.sending_ms)),
            DemoStage::Loading => Some(Millis(self.loading_ms)),
            DemoStage::Answer => Some(Millis(self.answer_ms)),
            DemoStage::Chart => Some(Millis(self.chart_ms)),
        }
    }

    /// Full cycle length for one example.
    pub fn cycle(&self, chars: usize) -> Millis {
        self.typing_duration(chars)
            .saturating_add(Millis(self.sending_ms))
            .saturating_add(Millis(self.loading_ms))
            .saturating_add(Millis(self.answer_ms))
            .saturating_add(Millis(self.chart_ms))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demo/stage.rs"]
mod tests;
