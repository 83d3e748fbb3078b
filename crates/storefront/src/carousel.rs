//! Carousel state.
//!
//! [`Carousel`] tracks which slide is active; indices wrap in both directions.
//! [`Autoplay`] tracks the advance timer so that at most one is ever live.
//! Neither touches the DOM: the slider binding applies the results.

/// Active-slide state machine over `0..len`.
///
/// A carousel always has at least one slide; [`Carousel::new`] refuses zero,
/// so the modulo in [`Carousel::goto`] can never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    /// Start at slide 0, or `None` when there are no slides.
    #[must_use]
    pub const fn new(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self { len, index: 0 })
    }

    /// Number of slides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// A carousel is never empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The active slide.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Whether slide `n` is the active one.
    #[must_use]
    pub const fn is_active(&self, n: usize) -> bool {
        n == self.index
    }

    /// Jump to `n` modulo the slide count. Negative `n` counts from the end.
    pub fn goto(&mut self, n: i64) -> usize {
        let len = i64::try_from(self.len).unwrap_or(i64::MAX);
        self.index = usize::try_from(n.rem_euclid(len)).unwrap_or(0);
        self.index
    }

    /// Advance one slide, wrapping to the first.
    pub fn next(&mut self) -> usize {
        self.step(1)
    }

    /// Go back one slide, wrapping to the last.
    pub fn prev(&mut self) -> usize {
        self.step(-1)
    }

    fn step(&mut self, delta: i64) -> usize {
        let current = i64::try_from(self.index).unwrap_or(0);
        self.goto(current + delta)
    }
}

/// Autoplay timer bookkeeping.
///
/// The timer itself lives in the browser; this holds its handle. `start`
/// cancels any running timer before scheduling a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Autoplay {
    period_ms: i32,
    handle: Option<i32>,
}

impl Autoplay {
    #[must_use]
    pub const fn new(period_ms: i32) -> Self {
        Self {
            period_ms,
            handle: None,
        }
    }

    #[must_use]
    pub const fn period_ms(&self) -> i32 {
        self.period_ms
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// (Re)start the timer from zero.
    ///
    /// `schedule` receives the period and returns the new timer handle, or
    /// `None` if scheduling failed.
    pub fn start(
        &mut self,
        schedule: impl FnOnce(i32) -> Option<i32>,
        cancel: impl FnOnce(i32),
    ) {
        self.stop(cancel);
        self.handle = schedule(self.period_ms);
    }

    /// Cancel the running timer, if any.
    pub fn stop(&mut self, cancel: impl FnOnce(i32)) {
        if let Some(handle) = self.handle.take() {
            cancel(handle);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn test_zero_slides_rejected() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn test_starts_at_zero() {
        let carousel = Carousel::new(3).unwrap();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_active(0));
        assert!(!carousel.is_active(1));
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut carousel = Carousel::new(3).unwrap();
        assert_eq!(carousel.prev(), 2);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.next(), 1);
        assert_eq!(carousel.next(), 2);
        assert_eq!(carousel.next(), 0);
    }

    #[test]
    fn test_goto_normalizes_any_integer() {
        let mut carousel = Carousel::new(3).unwrap();
        assert_eq!(carousel.goto(-1), 2);
        assert_eq!(carousel.goto(-3), 0);
        assert_eq!(carousel.goto(-4), 2);
        assert_eq!(carousel.goto(7), 1);
    }

    #[test]
    fn test_goto_is_idempotent() {
        let mut carousel = Carousel::new(4).unwrap();
        for n in -10..10 {
            let first = carousel.goto(n);
            assert_eq!(carousel.goto(n), first);
            assert_eq!(carousel.goto(n + 4), first);
        }
    }

    #[test]
    fn test_single_slide() {
        let mut carousel = Carousel::new(1).unwrap();
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
    }

    #[test]
    fn test_autoplay_restart_cancels_previous() {
        let cancelled = RefCell::new(Vec::new());
        let mut autoplay = Autoplay::new(5000);
        assert!(!autoplay.is_running());

        autoplay.start(|period| Some(period / 1000), |h| cancelled.borrow_mut().push(h));
        assert!(autoplay.is_running());
        assert!(cancelled.borrow().is_empty());

        autoplay.start(|_| Some(7), |h| cancelled.borrow_mut().push(h));
        assert_eq!(*cancelled.borrow(), vec![5]);

        autoplay.stop(|h| cancelled.borrow_mut().push(h));
        assert_eq!(*cancelled.borrow(), vec![5, 7]);
        assert!(!autoplay.is_running());

        // Stopping again cancels nothing
        autoplay.stop(|h| cancelled.borrow_mut().push(h));
        assert_eq!(cancelled.borrow().len(), 2);
    }

    #[test]
    fn test_autoplay_failed_schedule_is_not_running() {
        let mut autoplay = Autoplay::new(5000);
        autoplay.start(|_| None, |_| {});
        assert!(!autoplay.is_running());
    }
}
