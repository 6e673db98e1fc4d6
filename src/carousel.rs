//! Auto-advancing rotators for testimonials and similar card lists.

use crate::foundation::core::Millis;
use crate::foundation::error::{MotionError, MotionResult};

/// A customer quote with attribution.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub role: String,
    /// Path of the avatar/logo image, never opened here.
    #[serde(default)]
    pub image: String,
}

impl Testimonial {
    pub fn new(
        quote: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            quote: quote.into(),
            name: name.into(),
            role: role.into(),
            image: image.into(),
        }
    }

    /// Lead sentence and the emphasized remainder (empty when the quote is one sentence).
    pub fn split_quote(&self) -> (&str, String) {
        let mut parts = self.quote.split(". ");
        let lead = parts.next().unwrap_or_default();
        let rest: Vec<&str> = parts.collect();
        (lead, rest.join(". "))
    }

    /// Built-in spotlight quotes used when a page supplies none.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                "Innan MinCFO styrde vi ekonomin reaktivt och med för låg precision. Nu ser vi avvikelser tidigare och kan fatta rätt beslut snabbare.",
                "Rikard Jonsson",
                "CEO, B2B SaaS-bolag",
                "/customers/testimonials/logo-rikard.avif",
            ),
            Self::new(
                "MinCFO gav oss struktur i både rapportering och prioritering. Vi lägger mindre tid på administration och mer tid på beslut som driver verksamheten framåt.",
                "Oskar Nordmark",
                "Financial Controller, Hälsa Hemma",
                "/customers/testimonials/logo-oskar.avif",
            ),
            Self::new(
                "För oss blev skillnaden tydlig direkt. Med realtidsdata och bättre scenarioarbete kan ledningen agera snabbare med högre trygghet i varje vägval.",
                "Aviv Fahri",
                "CEO, Showcase",
                "/customers/testimonials/logo-aviv.avif",
            ),
        ]
    }
}

/// When a carousel is allowed to advance on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Autoplay {
    /// Always rotating.
    Always,
    /// Only while on screen and reduced motion is off.
    WhenVisible,
}

/// Non-empty rotating list with a current index.
#[derive(Clone, Debug)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
    interval: Millis,
    autoplay: Autoplay,
    visible: bool,
    reduced_motion: bool,
    elapsed: Millis,
}

impl<T> Carousel<T> {
    /// `initial` wraps into range. Rejects empty lists and a zero interval.
    pub fn new(
        items: Vec<T>,
        interval: Millis,
        initial: usize,
        autoplay: Autoplay,
    ) -> MotionResult<Self> {
        if items.is_empty() {
            return Err(MotionError::validation("carousel needs at least one item"));
        }
        if interval == Millis::ZERO {
            return Err(MotionError::validation("carousel interval must be > 0"));
        }
        let index = initial % items.len();
        Ok(Self {
            items,
            index,
            interval,
            autoplay,
            visible: false,
            reduced_motion: false,
            elapsed: Millis::ZERO,
        })
    }

    /// Like [`Carousel::new`], substituting `fallback` when `items` is empty.
    pub fn with_fallback(
        items: Vec<T>,
        fallback: Vec<T>,
        interval: Millis,
        initial: usize,
        autoplay: Autoplay,
    ) -> MotionResult<Self> {
        let items = if items.is_empty() { fallback } else { items };
        Self::new(items, interval, initial, autoplay)
    }

    /// Home page customer cards: 4.6 s, starting at the second card, paused off screen.
    pub fn customers(items: Vec<T>) -> MotionResult<Self> {
        Self::new(items, Millis(4600), 1, Autoplay::WhenVisible)
    }

    /// Solution-page quote spotlight: 5.2 s, always rotating.
    pub fn spotlight(items: Vec<T>, fallback: Vec<T>) -> MotionResult<Self> {
        Self::with_fallback(items, fallback, Millis(5200), 0, Autoplay::Always)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Never true for a constructed carousel.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &T {
        &self.items[self.index]
    }

    /// Index of the card shown left of the current one.
    pub fn prev_index(&self) -> usize {
        (self.index + self.len() - 1) % self.len()
    }

    /// Index of the card shown right of the current one.
    pub fn next_index(&self) -> usize {
        (self.index + 1) % self.len()
    }

    pub fn go_next(&mut self) -> usize {
        self.index = self.next_index();
        self.index
    }

    pub fn go_prev(&mut self) -> usize {
        self.index = self.prev_index();
        self.index
    }

    /// Jump to `index`. Leaves the autoplay timer running.
    pub fn select(&mut self, index: usize) -> MotionResult<()> {
        if index >= self.len() {
            return Err(MotionError::validation(format!(
                "carousel index {index} out of range (len {})",
                self.len()
            )));
        }
        self.index = index;
        Ok(())
    }

    pub fn autoplay_allowed(&self) -> bool {
        match self.autoplay {
            Autoplay::Always => true,
            Autoplay::WhenVisible => self.visible && !self.reduced_motion,
        }
    }

    /// Visibility change; restarts the autoplay interval when it changes.
    pub fn set_visible(&mut self, visible: bool) {
        if visible != self.visible {
            self.visible = visible;
            self.elapsed = Millis::ZERO;
        }
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if reduced != self.reduced_motion {
            self.reduced_motion = reduced;
            self.elapsed = Millis::ZERO;
        }
    }

    /// Advance the autoplay timer. Returns the new index when it moved.
    pub fn advance(&mut self, dt: Millis) -> Option<usize> {
        if !self.autoplay_allowed() {
            return None;
        }
        let total = self.elapsed.saturating_add(dt).0;
        let steps = total / self.interval.0;
        self.elapsed = Millis(total % self.interval.0);
        if steps == 0 {
            return None;
        }
        let len = self.len() as u64;
        self.index = ((self.index as u64 + steps % len) % len) as usize;
        tracing::debug!(index = self.index, steps, "carousel advanced");
        Some(self.index)
    }
}

#[cfg(test)]
#[path = "../tests/unit/carousel.rs"]
mod tests;
