//! Timed rotations: the flipping testimonial deck, the hero's rotating word
//! and the services marquee.
//!
//! These hold only the index arithmetic. The UI owns the timers and calls
//! the `begin_*`/`finish_*`/`tick` methods when they fire.

use std::time::Duration;

/// Auto-advance period of the testimonial deck.
pub const TESTIMONIAL_INTERVAL: Duration = Duration::from_millis(5000);
/// Length of one card flip.
pub const FLIP_DURATION: Duration = Duration::from_millis(600);
/// Period of the hero word rotation.
pub const WORD_INTERVAL: Duration = Duration::from_millis(3000);
/// Fade-out before the hero word changes.
pub const WORD_FADE: Duration = Duration::from_millis(500);
/// Workshop page testimonial rotation.
pub const WORKSHOP_TESTIMONIAL_INTERVAL: Duration = Duration::from_millis(5000);

/// Index that wraps around `len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatingIndex {
    len: usize,
    current: usize,
}

impl RotatingIndex {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    pub fn retreat(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
        self.current
    }

    /// Jump to `index` if it is in range.
    pub fn set(&mut self, index: usize) -> bool {
        if index < self.len {
            self.current = index;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipDirection {
    Next,
    Prev,
}

impl FlipDirection {
    pub fn class(&self) -> &'static str {
        match self {
            FlipDirection::Next => "flip-next",
            FlipDirection::Prev => "flip-prev",
        }
    }
}

/// Where a card sits relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSlot {
    Active,
    Prev,
    Next,
    Hidden,
}

impl CardSlot {
    pub fn class(&self) -> &'static str {
        match self {
            CardSlot::Active => "active",
            CardSlot::Prev => "prev",
            CardSlot::Next => "next",
            CardSlot::Hidden => "hidden",
        }
    }
}

/// The testimonial deck. A move starts a flip; while it runs, further
/// moves are ignored. The index changes when the flip finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipCarousel {
    index: RotatingIndex,
    flipping: Option<FlipDirection>,
}

impl FlipCarousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: RotatingIndex::new(len),
            flipping: None,
        }
    }

    pub fn current(&self) -> usize {
        self.index.current()
    }

    pub fn flipping(&self) -> Option<FlipDirection> {
        self.flipping
    }

    pub fn is_flipping(&self) -> bool {
        self.flipping.is_some()
    }

    /// Start a flip. Returns `false` if one is already running.
    pub fn begin(&mut self, direction: FlipDirection) -> bool {
        if self.flipping.is_some() || self.index.is_empty() {
            return false;
        }
        self.flipping = Some(direction);
        true
    }

    pub fn begin_next(&mut self) -> bool {
        self.begin(FlipDirection::Next)
    }

    pub fn begin_prev(&mut self) -> bool {
        self.begin(FlipDirection::Prev)
    }

    /// Complete the running flip and return the new index.
    pub fn finish_flip(&mut self) -> usize {
        match self.flipping.take() {
            Some(FlipDirection::Next) => self.index.advance(),
            Some(FlipDirection::Prev) => self.index.retreat(),
            None => self.index.current(),
        }
    }

    /// Clicking a card flips one step toward it.
    pub fn click(&mut self, index: usize) -> bool {
        let current = self.current();
        if index == current {
            return false;
        }
        if index > current {
            self.begin_next()
        } else {
            self.begin_prev()
        }
    }

    pub fn slot(&self, index: usize) -> CardSlot {
        let len = self.index.len();
        let current = self.current();
        if index == current {
            CardSlot::Active
        } else if len > 1 && index == (current + len - 1) % len {
            CardSlot::Prev
        } else if len > 1 && index == (current + 1) % len {
            CardSlot::Next
        } else {
            CardSlot::Hidden
        }
    }
}

/// Rotating headline word with a fade between words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordRotation {
    index: RotatingIndex,
    shown: bool,
}

impl WordRotation {
    pub fn new(len: usize) -> Self {
        Self {
            index: RotatingIndex::new(len),
            shown: true,
        }
    }

    pub fn current(&self) -> usize {
        self.index.current()
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Start fading the current word out.
    pub fn fade_out(&mut self) {
        self.shown = false;
    }

    /// Show the next word.
    pub fn advance(&mut self) -> usize {
        self.shown = true;
        self.index.advance()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Carousel,
    Grid,
}

/// Continuously scrolling strip of service cards.
///
/// The strip holds three copies of the cards; the position wraps back to
/// zero after one copy has scrolled by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marquee {
    position: f64,
    cards: usize,
    paused: bool,
    mode: ViewMode,
    active_card: Option<usize>,
}

impl Marquee {
    /// Card width plus gap, in pixels.
    pub const CARD_WIDTH: f64 = 400.0;
    /// Pixels moved per animation frame.
    pub const SPEED: f64 = 0.5;
    /// Copies of the card list rendered back to back.
    pub const COPIES: usize = 3;

    pub fn new(cards: usize) -> Self {
        Self {
            position: 0.0,
            cards,
            paused: false,
            mode: ViewMode::Carousel,
            active_card: None,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn active_card(&self) -> Option<usize> {
        self.active_card
    }

    fn set_width(&self) -> f64 {
        self.cards as f64 * Self::CARD_WIDTH
    }

    /// Whether frames should currently move the strip.
    pub fn is_running(&self) -> bool {
        self.mode == ViewMode::Carousel && !self.paused
    }

    /// Advance one frame and return the scroll offset.
    pub fn tick(&mut self) -> f64 {
        if self.is_running() {
            self.position += Self::SPEED;
            if self.position >= self.set_width() {
                self.position = 0.0;
            }
        }
        self.position
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Switch between carousel and grid; resets selection and position.
    pub fn toggle_mode(&mut self) -> ViewMode {
        self.mode = match self.mode {
            ViewMode::Carousel => ViewMode::Grid,
            ViewMode::Grid => ViewMode::Carousel,
        };
        self.active_card = None;
        self.position = 0.0;
        self.mode
    }

    /// Clicking the open card closes it; any other card opens.
    pub fn click_card(&mut self, index: usize) {
        self.active_card = if self.active_card == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotating_index_wraps() {
        let mut idx = RotatingIndex::new(3);
        assert_eq!(idx.retreat(), 2);
        assert_eq!(idx.advance(), 0);
        assert_eq!(idx.advance(), 1);
        assert!(!idx.set(3));
        let mut empty = RotatingIndex::new(0);
        assert_eq!(empty.advance(), 0);
    }

    #[test]
    fn test_flip_ignores_moves_while_running() {
        let mut deck = FlipCarousel::new(5);
        assert!(deck.begin_next());
        assert!(!deck.begin_prev());
        assert_eq!(deck.current(), 0);
        assert_eq!(deck.finish_flip(), 1);
        assert!(!deck.is_flipping());
    }

    #[test]
    fn test_click_moves_one_step() {
        let mut deck = FlipCarousel::new(5);
        assert!(deck.click(4));
        assert_eq!(deck.finish_flip(), 1);
        assert!(deck.click(0));
        assert_eq!(deck.finish_flip(), 0);
        assert!(!deck.click(0));
    }

    #[test]
    fn test_slots_wrap() {
        let deck = FlipCarousel::new(5);
        assert_eq!(deck.slot(0), CardSlot::Active);
        assert_eq!(deck.slot(1), CardSlot::Next);
        assert_eq!(deck.slot(4), CardSlot::Prev);
        assert_eq!(deck.slot(2), CardSlot::Hidden);
    }

    #[test]
    fn test_word_rotation() {
        let mut words = WordRotation::new(4);
        words.fade_out();
        assert!(!words.is_shown());
        assert_eq!(words.advance(), 1);
        assert!(words.is_shown());
    }

    #[test]
    fn test_marquee_wraps_after_one_set() {
        let mut strip = Marquee::new(2);
        for _ in 0..1599 {
            strip.tick();
        }
        assert_eq!(strip.position(), 799.5);
        assert_eq!(strip.tick(), 0.0);
    }

    #[test]
    fn test_marquee_pause_and_grid() {
        let mut strip = Marquee::new(6);
        strip.tick();
        strip.set_paused(true);
        assert_eq!(strip.tick(), 0.5);
        strip.set_paused(false);
        strip.click_card(2);
        assert_eq!(strip.toggle_mode(), ViewMode::Grid);
        assert_eq!(strip.active_card(), None);
        assert_eq!(strip.tick(), 0.0);
    }

    #[test]
    fn test_click_card_toggles() {
        let mut strip = Marquee::new(6);
        strip.click_card(1);
        assert_eq!(strip.active_card(), Some(1));
        strip.click_card(1);
        assert_eq!(strip.active_card(), None);
    }
}
