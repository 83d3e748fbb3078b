//! Header and navigation state.

/// Class the header carries once the page has scrolled.
pub const SCROLLED_CLASS: &str = "scrolled";
/// Class the header carries while the mobile menu is open.
pub const OPEN_CLASS: &str = "open";

/// What the header should look like.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub scrolled: bool,
    pub open: bool,
    /// Whether `scrolled` has been reported at least once.
    synced: bool,
}

impl HeaderState {
    /// Record the scroll offset. Returns `true` if the header class must be
    /// written, which is always the case on the first call.
    pub fn on_scroll(&mut self, offset: f64, threshold: f64) -> bool {
        let scrolled = offset > threshold;
        let changed = scrolled != self.scrolled || !self.synced;
        self.scrolled = scrolled;
        self.synced = true;
        changed
    }

    /// Flip the mobile menu and return the new state.
    pub const fn toggle_nav(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub const fn close_nav(&mut self) {
        self.open = false;
    }
}

/// The in-page target of an anchor href, if it has one.
///
/// A bare `#` is not a target.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() >= 2).then_some(href)
}
