//! Scroll-reveal planning.

/// Class added to a `.reveal` element once it is shown.
pub const REVEAL_CLASS: &str = "in";

/// How the page reveals its `.reveal` elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealMode {
    /// Watch each element and reveal it the first time this fraction is visible.
    Observe { threshold: f64 },
    /// No observer available: show everything now.
    ShowAll,
    /// Nothing to reveal.
    Idle,
}

impl RevealMode {
    /// Pick a mode for `count` elements.
    #[must_use]
    pub fn plan(count: usize, observer_supported: bool, threshold: f64) -> Self {
        match (count, observer_supported) {
            (0, _) => Self::Idle,
            (_, true) => Self::Observe {
                threshold: threshold.clamp(0.0, 1.0),
            },
            (_, false) => Self::ShowAll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan() {
        assert_eq!(RevealMode::plan(0, true, 0.2), RevealMode::Idle);
        assert_eq!(RevealMode::plan(0, false, 0.2), RevealMode::Idle);
        assert_eq!(RevealMode::plan(4, false, 0.2), RevealMode::ShowAll);
        assert_eq!(
            RevealMode::plan(4, true, 0.2),
            RevealMode::Observe { threshold: 0.2 }
        );
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(
            RevealMode::plan(1, true, 3.0),
            RevealMode::Observe { threshold: 1.0 }
        );
    }
}
