//! Scroll-driven inputs: progress through a viewport window, section visibility and the
//! floating nav's active section.

pub mod nav;
pub mod progress;
pub mod visibility;
