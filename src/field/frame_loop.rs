use crate::foundation::core::SurfaceSize;
use crate::render::backend::DrawList;

/// Animation time added per painted frame, in seconds.
pub const FRAME_STEP_S: f64 = 0.016;

/// Something that paints itself into a [`DrawList`] at a given animation time.
pub trait Backdrop {
    fn size(&self) -> SurfaceSize;

    /// Re-lay out for a new surface size (reseeds positions).
    fn resize(&mut self, size: SurfaceSize);

    /// Paint the frame for `time_s` and step any moving parts.
    fn frame(&mut self, time_s: f64) -> DrawList;
}

impl<B: Backdrop + ?Sized> Backdrop for Box<B> {
    fn size(&self) -> SurfaceSize {
        (**self).size()
    }

    fn resize(&mut self, size: SurfaceSize) {
        (**self).resize(size);
    }

    fn frame(&mut self, time_s: f64) -> DrawList {
        (**self).frame(time_s)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackdropKind {
    #[default]
    Dots,
    Beam,
}

impl BackdropKind {
    /// Boxed backdrop of this kind with its default options and the given seed.
    pub fn build(self, size: SurfaceSize, seed: u64) -> Box<dyn Backdrop> {
        match self {
            Self::Dots => Box::new(crate::field::dots::BeamField::new(
                size,
                crate::field::dots::FieldOpts {
                    seed,
                    ..Default::default()
                },
            )),
            Self::Beam => Box::new(crate::field::beam::CanvasBeam::new(
                size,
                crate::field::beam::BeamOpts {
                    seed,
                    ..Default::default()
                },
            )),
        }
    }
}

/// Single-threaded animation-frame gate around a backdrop.
///
/// Hidden documents paint nothing; reduced motion paints exactly one static frame (again after a
/// resize, since resizing clears the canvas).
#[derive(Debug)]
pub struct FrameLoop<B: Backdrop> {
    backdrop: B,
    time_s: f64,
    document_visible: bool,
    reduced_motion: bool,
    static_painted: bool,
    painted: u64,
}

impl<B: Backdrop> FrameLoop<B> {
    pub fn new(backdrop: B, reduced_motion: bool) -> Self {
        Self {
            backdrop,
            time_s: 0.0,
            document_visible: true,
            reduced_motion,
            static_painted: false,
            painted: 0,
        }
    }

    pub fn backdrop(&self) -> &B {
        &self.backdrop
    }

    pub fn time_s(&self) -> f64 {
        self.time_s
    }

    /// Frames painted so far.
    pub fn painted(&self) -> u64 {
        self.painted
    }

    pub fn is_running(&self) -> bool {
        self.document_visible && !self.reduced_motion
    }

    pub fn set_document_visible(&mut self, visible: bool) {
        if visible != self.document_visible {
            tracing::debug!(visible, "backdrop document visibility");
        }
        self.document_visible = visible;
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        self.backdrop.resize(size);
        self.static_painted = false;
    }

    /// One animation-frame callback. Returns the frame to paint, if any.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn tick(&mut self) -> Option<DrawList> {
        if !self.document_visible {
            return None;
        }
        if self.reduced_motion {
            if self.static_painted {
                return None;
            }
            self.static_painted = true;
        }
        self.time_s += FRAME_STEP_S;
        self.painted += 1;
        Some(self.backdrop.frame(self.time_s))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/frame_loop.rs"]
mod tests;
