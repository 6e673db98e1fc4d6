#![forbid(unsafe_code)]

//! Motion layer of the MinCFO marketing site, as plain deterministic state machines.
//!
//! - [`scroll`]: scroll progress windows, visibility latches and the nav's active section.
//! - [`curve`]: the 36-point section divider curves and smooth chart lines.
//! - [`demo`]: the scripted copilot conversation and the "how it works" step loop.
//! - [`charts`]: synthetic KPI trend, plan forecast and refresh pulses.
//! - [`field`]: particle/beam backdrops and their frame gate.
//! - [`render`]: draw lists rasterized on the CPU, divider SVG raster.
//! - [`carousel`], [`hero`], [`content`]: rotators, card tilt and JSON content documents.
//!
//! Nothing here touches a DOM or a clock. Hosts feed in viewport geometry, visibility flags and
//! elapsed time, and read back progress values, snapshots and draw lists.

pub mod carousel;
pub mod charts;
pub mod content;
pub mod curve;
pub mod demo;
pub mod field;
pub mod foundation;
pub mod hero;
pub mod render;
pub mod scroll;

pub use carousel::{Autoplay, Carousel, Testimonial};
pub use content::{ScenarioContent, SiteContent};
pub use curve::{DividerCurve, DividerVariant, Responsive, smooth_path};
pub use demo::{ConversationEngine, DemoExample, DemoScript, DemoStage, StageTimings};
pub use field::{Backdrop, BackdropKind, BeamField, CanvasBeam, FrameLoop};
pub use foundation::core::{ElementRect, Millis, Rgba, SurfaceSize, Viewport};
pub use foundation::error::{MotionError, MotionResult};
pub use foundation::math::{clamp, cubic, lerp};
pub use hero::{CardTilt, Tilt};
pub use render::{BackendKind, DrawList, FrameRGBA, RasterOpts, RenderBackend, create_backend};
pub use scroll::nav::NavTracker;
pub use scroll::progress::{ProgressTracker, ScrollWindow};
pub use scroll::visibility::VisibilityLatch;
