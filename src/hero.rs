//! Hero product-card tilt driven by scroll progress and pointer position.

use crate::foundation::core::ElementRect;
use crate::foundation::math::clamp;
use crate::scroll::progress::pinned_progress;

/// Resolved card transform angles.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tilt {
    /// Degrees around the x axis.
    pub rotate_x: f64,
    /// Degrees around the y axis.
    pub rotate_y: f64,
    pub scale: f64,
}

impl Tilt {
    /// CSS `transform` value for the card.
    pub fn to_css(&self) -> String {
        format!(
            "perspective(2000px) rotateX({}deg) rotateY({}deg) scale({})",
            self.rotate_x, self.rotate_y, self.scale
        )
    }
}

/// Card tilt state. Pointer input is ignored unless the device has a fine hover pointer and
/// reduced motion is off.
#[derive(Clone, Debug, Default)]
pub struct CardTilt {
    progress: f64,
    mouse_x: f64,
    mouse_y: f64,
    hovering: bool,
    pointer_enabled: bool,
}

impl CardTilt {
    pub fn new(fine_pointer: bool, reduced_motion: bool) -> Self {
        Self {
            pointer_enabled: fine_pointer && !reduced_motion,
            ..Self::default()
        }
    }

    pub fn pointer_enabled(&self) -> bool {
        self.pointer_enabled
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Scroll/resize of the hero section. Missing rects leave the state untouched.
    pub fn on_scroll(&mut self, section: Option<ElementRect>) -> Option<Tilt> {
        let rect = section?;
        self.progress = pinned_progress(rect);
        Some(self.tilt())
    }

    /// Pointer moved to client position `(x, y)` over the card at `card`.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, card: ElementRect) -> Option<Tilt> {
        if !self.pointer_enabled || card.width <= 0.0 || card.height <= 0.0 {
            return None;
        }
        let nx = (x - card.left) / card.width;
        let ny = (y - card.top) / card.height;
        self.mouse_x = clamp(nx * 2.0 - 1.0, -1.0, 1.0);
        self.mouse_y = clamp(ny * 2.0 - 1.0, -1.0, 1.0);
        self.hovering = true;
        Some(self.tilt())
    }

    pub fn on_pointer_leave(&mut self) -> Option<Tilt> {
        if !self.pointer_enabled {
            return None;
        }
        self.mouse_x = 0.0;
        self.mouse_y = 0.0;
        self.hovering = false;
        Some(self.tilt())
    }

    pub fn tilt(&self) -> Tilt {
        let (pointer_x, pointer_y) = if self.hovering {
            (-self.mouse_y * 4.0, self.mouse_x * 6.0)
        } else {
            (0.0, 0.0)
        };
        Tilt {
            rotate_x: 16.0 - self.progress * 9.0 + pointer_x,
            rotate_y: pointer_y,
            scale: 1.0 - self.progress * 0.03,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/hero.rs"]
mod tests;
