//! Canvas-style animated backdrops.
//!
//! - [`dots::BeamField`]: the hero's drifting dot wave with rising particles.
//! - [`beam::CanvasBeam`]: a vertical light beam built from dots, glow bands and rain streaks.
//!
//! Both are driven through [`frame_loop::FrameLoop`], which decides when a frame is painted.

pub mod beam;
pub mod dots;
pub mod frame_loop;

pub use beam::{BeamOpts, CanvasBeam};
pub use dots::{BeamField, FieldOpts};
pub use frame_loop::{Backdrop, BackdropKind, FrameLoop, FRAME_STEP_S};
