use crate::foundation::core::Viewport;

/// Home page section anchors in document order.
pub const HOME_SECTIONS: [&str; 6] = [
    "hero",
    "produkt",
    "losningar",
    "customers",
    "security",
    "how-it-works",
];

/// Scroll offset after which the nav switches to its compact style.
pub const SCROLLED_AFTER_PX: f64 = 12.0;

/// Fraction of the viewport height added to `scroll_y` to place the reading cursor.
pub const CURSOR_FRACTION: f64 = 0.32;

/// Nav state derived from one scroll event.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct NavState {
    pub scrolled: bool,
    pub active: String,
}

/// Tracks the floating nav's "scrolled" flag and highlighted section.
#[derive(Clone, Debug)]
pub struct NavTracker {
    sections: Vec<String>,
    state: NavState,
}

impl Default for NavTracker {
    fn default() -> Self {
        Self::new(HOME_SECTIONS)
    }
}

impl NavTracker {
    /// Tracker over `sections`, in document order. The first id is the fallback.
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections: Vec<String> = sections.into_iter().map(Into::into).collect();
        let active = sections
            .first()
            .cloned()
            .unwrap_or_else(|| HOME_SECTIONS[0].to_owned());
        Self {
            sections,
            state: NavState {
                scrolled: false,
                active,
            },
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Recompute from the viewport and a lookup of section document offsets.
    ///
    /// Sections the lookup cannot resolve are skipped. Returns the new state when it changed.
    pub fn update<F>(&mut self, viewport: Viewport, offset_of: F) -> Option<&NavState>
    where
        F: Fn(&str) -> Option<f64>,
    {
        let cursor = viewport.scroll_y + viewport.height * CURSOR_FRACTION;
        let fallback = self
            .sections
            .first()
            .map(String::as_str)
            .unwrap_or(HOME_SECTIONS[0]);
        let active = self
            .sections
            .iter()
            .filter(|id| offset_of(id).is_some_and(|top| top <= cursor))
            .next_back()
            .map(String::as_str)
            .unwrap_or(fallback);

        let next = NavState {
            scrolled: viewport.scroll_y > SCROLLED_AFTER_PX,
            active: active.to_owned(),
        };
        if next == self.state {
            return None;
        }
        tracing::trace!(active = %next.active, scrolled = next.scrolled, "nav state");
        self.state = next;
        Some(&self.state)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/nav.rs"]
mod tests;
