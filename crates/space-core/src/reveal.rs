//! Scroll-reveal bookkeeping.
//!
//! Sections fade in the first time they scroll into view. Each section has
//! an index; the first time the viewport observer reports it, a reveal is
//! scheduled `index * stagger` later, and when that timer fires the index
//! joins the visible set. The set only grows between resets. A remounted
//! page starts over with a new set; a page whose listing is re-filtered
//! calls [`RevealSet::reset`], which also voids timers scheduled before it.

use std::collections::BTreeSet;
use std::time::Duration;

/// Viewport observer settings plus the per-page stagger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible
    pub threshold: f64,
    pub root_margin: &'static str,
    /// Extra delay per section index
    pub stagger: Duration,
}

impl RevealOptions {
    pub const THRESHOLD: f64 = 0.15;
    pub const ROOT_MARGIN: &'static str = "50px";

    pub const fn with_stagger(stagger_ms: u64) -> Self {
        Self {
            threshold: Self::THRESHOLD,
            root_margin: Self::ROOT_MARGIN,
            stagger: Duration::from_millis(stagger_ms),
        }
    }

    /// IEEE support and services pages.
    pub const FAST: Self = Self::with_stagger(80);
    /// Contact, about and workshops pages.
    pub const STANDARD: Self = Self::with_stagger(100);
    /// USP section and portfolio page.
    pub const RELAXED: Self = Self::with_stagger(150);

    /// Delay before section `index` is revealed.
    pub fn delay_for(&self, index: usize) -> Duration {
        self.stagger
            .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Which sections have been scheduled and which are already visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealSet {
    scheduled: BTreeSet<usize>,
    visible: BTreeSet<usize>,
    generation: u64,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when `index` intersects the viewport.
    ///
    /// Returns the delay to wait before calling [`reveal`](Self::reveal), or
    /// `None` if this index was seen before.
    pub fn schedule(&mut self, index: usize, options: &RevealOptions) -> Option<Duration> {
        if self.visible.contains(&index) || !self.scheduled.insert(index) {
            return None;
        }
        Some(options.delay_for(index))
    }

    /// Mark `index` visible. Returns `false` if it already was.
    pub fn reveal(&mut self, index: usize) -> bool {
        self.scheduled.insert(index);
        self.visible.insert(index)
    }

    /// Bumped by every [`reset`](Self::reset). Capture it when a reveal is
    /// scheduled and pass it to [`reveal_in`](Self::reveal_in).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// [`reveal`](Self::reveal), unless the set was reset after
    /// `generation`. Stale timers return `false` and change nothing.
    pub fn reveal_in(&mut self, generation: u64, index: usize) -> bool {
        if generation != self.generation {
            return false;
        }
        self.reveal(index)
    }

    /// Forget every scheduled and visible index and start a new generation.
    pub fn reset(&mut self) {
        self.scheduled.clear();
        self.visible.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }

    pub fn visible(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible.iter().copied()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// `base` plus `visible` once the section has been revealed.
    pub fn class_for(&self, index: usize, base: &str) -> String {
        if self.is_visible(index) {
            format!("{base} visible")
        } else {
            base.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_crossing_schedules_staggered_delay() {
        let mut set = RevealSet::new();
        let opts = RevealOptions::FAST;
        assert_eq!(set.schedule(0, &opts), Some(Duration::ZERO));
        assert_eq!(set.schedule(3, &opts), Some(Duration::from_millis(240)));
    }

    #[test]
    fn test_recrossing_does_not_reschedule() {
        let mut set = RevealSet::new();
        let opts = RevealOptions::STANDARD;
        assert!(set.schedule(2, &opts).is_some());
        assert_eq!(set.schedule(2, &opts), None);
        assert!(set.reveal(2));
        assert_eq!(set.schedule(2, &opts), None);
    }

    #[test]
    fn test_reveal_is_a_union() {
        let mut set = RevealSet::new();
        assert!(set.reveal(1));
        assert!(set.reveal(0));
        assert!(!set.reveal(1));
        assert_eq!(set.visible().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_reset_voids_earlier_timers() {
        let mut set = RevealSet::new();
        let opts = RevealOptions::FAST;
        assert!(set.schedule(0, &opts).is_some());
        assert!(set.schedule(4, &opts).is_some());
        let before = set.generation();
        assert!(set.reveal_in(before, 0));

        set.reset();
        assert_eq!(set.visible_count(), 0);
        assert_ne!(set.generation(), before);

        // Index 4's timer was started before the reset
        assert!(!set.reveal_in(before, 4));
        assert!(!set.is_visible(4));

        // The re-filtered listing schedules afresh
        assert!(set.schedule(4, &opts).is_some());
        assert!(set.reveal_in(set.generation(), 4));
        assert_eq!(set.visible().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn test_class_for() {
        let mut set = RevealSet::new();
        assert_eq!(set.class_for(0, "reveal"), "reveal");
        set.reveal(0);
        assert_eq!(set.class_for(0, "reveal"), "reveal visible");
    }

    #[test]
    fn test_presets() {
        assert_eq!(RevealOptions::RELAXED.stagger, Duration::from_millis(150));
        assert_eq!(RevealOptions::default().threshold, 0.15);
        assert_eq!(RevealOptions::default().root_margin, "50px");
    }
}
