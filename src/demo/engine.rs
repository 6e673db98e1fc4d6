use crate::demo::script::DemoScript;
use crate::demo::stage::{DemoStage, StageTimings};
use crate::foundation::core::Millis;
use crate::foundation::error::MotionResult;

/// One stage change reported by [`ConversationEngine::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StageTransition {
    pub from: DemoStage,
    pub to: DemoStage,
    /// Example index after the transition.
    pub index: usize,
    /// Engine clock at which the transition happened, since the demo became visible.
    pub at: Millis,
}

/// Render-facing view of the engine.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DemoSnapshot {
    pub stage: DemoStage,
    pub index: usize,
    pub typed_len: usize,
    pub typed_question: String,
    pub show_question_bubble: bool,
    pub show_answer: bool,
    pub show_chart: bool,
    pub is_typing: bool,
    pub is_sending: bool,
    pub is_loading: bool,
}

/// Tick-driven conversation state machine.
///
/// Stages advance on accumulated time only; leftover time carries into the next stage, so a
/// single large `dt` walks through every intermediate stage in order.
#[derive(Clone, Debug)]
pub struct ConversationEngine {
    script: DemoScript,
    timings: StageTimings,
    visible: bool,
    stage: DemoStage,
    index: usize,
    typed_len: usize,
    in_stage: Millis,
    clock: Millis,
}

impl ConversationEngine {
    pub fn new(script: DemoScript, timings: StageTimings) -> MotionResult<Self> {
        timings.validate()?;
        Ok(Self {
            script,
            timings,
            visible: false,
            stage: DemoStage::Idle,
            index: 0,
            typed_len: 0,
            in_stage: Millis::ZERO,
            clock: Millis::ZERO,
        })
    }

    pub fn script(&self) -> &DemoScript {
        &self.script
    }

    pub fn timings(&self) -> &StageTimings {
        &self.timings
    }

    pub fn stage(&self) -> DemoStage {
        self.stage
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn typed_len(&self) -> usize {
        self.typed_len
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Time since the demo became visible.
    pub fn clock(&self) -> Millis {
        self.clock
    }

    /// Start (visible) or cancel (hidden) the cycle.
    ///
    /// Hiding resets to `Idle` with nothing typed and the first example selected. Showing starts
    /// example 0 at `Typing`. Repeating the current state is a no-op.
    pub fn set_visible(&mut self, visible: bool) -> Option<StageTransition> {
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        let from = self.stage;
        self.index = 0;
        self.typed_len = 0;
        self.in_stage = Millis::ZERO;
        self.clock = Millis::ZERO;
        self.stage = if visible {
            DemoStage::Typing
        } else {
            DemoStage::Idle
        };
        tracing::debug!(visible, "demo visibility");
        Some(StageTransition {
            from,
            to: self.stage,
            index: 0,
            at: Millis::ZERO,
        })
    }

    /// Advance the engine by `dt`, returning every stage change in order.
    pub fn advance(&mut self, dt: Millis) -> Vec<StageTransition> {
        let mut out = Vec::new();
        if !self.visible {
            return out;
        }
        let mut left = dt;
        loop {
            let chars = self.script.get(self.index).question_len();
            let Some(total) = self.timings.duration(self.stage, chars) else {
                break;
            };
            let remaining = total.saturating_sub(self.in_stage);
            if left < remaining {
                self.in_stage = self.in_stage.saturating_add(left);
                self.clock = self.clock.saturating_add(left);
                break;
            }
            left = left.saturating_sub(remaining);
            self.clock = self.clock.saturating_add(remaining);
            out.push(self.finish_stage());
        }
        if self.stage == DemoStage::Typing {
            let chars = self.script.get(self.index).question_len();
            let typed = (self.in_stage.0 / self.timings.typing_tick_ms) as usize;
            self.typed_len = typed.min(chars);
        }
        out
    }

    fn finish_stage(&mut self) -> StageTransition {
        let from = self.stage;
        match from.next() {
            Some(to) => {
                if from == DemoStage::Typing {
                    self.typed_len = self.script.get(self.index).question_len();
                }
                self.stage = to;
            }
            None => {
                self.index = (self.index + 1) % self.script.len();
                self.typed_len = 0;
                self.stage = DemoStage::Typing;
            }
        }
        self.in_stage = Millis::ZERO;
        tracing::debug!(
            from = from.as_str(),
            to = self.stage.as_str(),
            index = self.index,
            at_ms = self.clock.0,
            "demo stage"
        );
        StageTransition {
            from,
            to: self.stage,
            index: self.index,
            at: self.clock,
        }
    }

    pub fn snapshot(&self) -> DemoSnapshot {
        let stage = self.stage;
        let example = self.script.get(self.index);
        DemoSnapshot {
            stage,
            index: self.index,
            typed_len: self.typed_len,
            typed_question: example.question_prefix(self.typed_len).to_owned(),
            show_question_bubble: !matches!(stage, DemoStage::Idle | DemoStage::Typing),
            show_answer: matches!(stage, DemoStage::Answer | DemoStage::Chart),
            show_chart: stage == DemoStage::Chart,
            is_typing: stage == DemoStage::Typing,
            is_sending: stage == DemoStage::Sending,
            is_loading: stage == DemoStage::Loading,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demo/engine.rs"]
mod tests;
