//! Scripted chat demo: a question is typed, "sent", answered and charted, then the next canned
//! example starts. Everything is driven by [`engine::ConversationEngine::advance`].

pub mod engine;
pub mod script;
pub mod stage;
pub mod steps;

pub use engine::{ConversationEngine, DemoSnapshot, StageTransition};
pub use script::{ChartBar, DemoExample, DemoScript};
pub use stage::{DemoStage, StageTimings};
pub use steps::{StepLoop, StepUpdate};
