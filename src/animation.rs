//! Browser-free state behind the page's transitions: the reveal latch, the
//! count-up animation and the review carousel.

use std::rc::Rc;
use yew::Reducible;

/// Latch that turns a stream of intersection reports into a single reveal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    visible: bool,
}

impl Reveal {
    /// Returns `true` only for the report that first makes the section visible.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.visible || !intersecting {
            return false;
        }
        self.visible = true;
        true
    }
}

/// Fixed-tick counter running from zero to `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: u32,
    increment: f64,
    current: f64,
}

impl CountUp {
    pub fn new(target: u32, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = if tick_ms == 0 { 0.0 } else { duration_ms as f64 / tick_ms as f64 };
        let increment = if ticks >= 1.0 { target as f64 / ticks } else { target as f64 };
        Self { target, increment, current: 0.0 }
    }

    /// Advances one tick and returns the value to display.
    pub fn tick(&mut self) -> u32 {
        if !self.is_finished() {
            self.current += self.increment;
            if self.current >= self.target as f64 {
                self.current = self.target as f64;
            }
        }
        self.value()
    }

    pub fn value(&self) -> u32 {
        self.current.floor() as u32
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.target as f64
    }
}

/// Index into a fixed-length list that rotates with wraparound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

pub enum CarouselAction {
    Advance,
    Select(usize),
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    /// Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> usize {
        if index < self.len {
            self.index = index;
        }
        self.index
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            CarouselAction::Advance => next.advance(),
            CarouselAction::Select(index) => next.select(index),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub fn transition_delay(ms: u32) -> String {
    format!("transition-delay: {}ms;", ms)
}

/// Delay for the `index`th item of a list whose entrances start at `base_ms`.
pub fn stagger(base_ms: u32, index: usize, step_ms: u32) -> u32 {
    base_ms + index as u32 * step_ms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_flips_once_and_never_reverts() {
        let mut reveal = Reveal::default();
        assert!(!reveal.observe(false));
        assert_eq!(reveal, Reveal::default());

        assert!(reveal.observe(true));
        assert_ne!(reveal, Reveal::default());

        assert!(!reveal.observe(true));
        assert!(!reveal.observe(false));
        assert_ne!(reveal, Reveal::default());
    }

    #[test]
    fn count_up_is_monotonic_and_stops_at_target() {
        let mut counter = CountUp::new(500, 2_000, 16);
        let mut last = 0;
        let mut ticks = 0;
        while !counter.is_finished() {
            let value = counter.tick();
            assert!(value >= last, "counter went backwards: {} -> {}", last, value);
            assert!(value <= 500);
            last = value;
            ticks += 1;
            assert!(ticks <= 200, "counter never finished");
        }
        assert_eq!(last, 500);
        assert_eq!(ticks, 125);
        assert_eq!(counter.tick(), 500);
    }

    #[test]
    fn count_up_with_fractional_increment() {
        // 15 over 1.5s at 16ms ticks adds 0.16 per tick.
        let mut counter = CountUp::new(15, 1_500, 16);
        assert_eq!(counter.tick(), 0);
        for _ in 0..200 {
            counter.tick();
        }
        assert!(counter.is_finished());
        assert_eq!(counter.value(), 15);
    }

    #[test]
    fn count_up_degenerate_inputs() {
        let mut instant = CountUp::new(42, 0, 16);
        assert_eq!(instant.tick(), 42);
        assert!(instant.is_finished());

        let zero = CountUp::new(0, 1_000, 16);
        assert!(zero.is_finished());
        assert_eq!(zero.value(), 0);
    }

    #[test]
    fn carousel_wraps_around() {
        let mut carousel = Carousel::new(4);
        let seen: Vec<usize> = (0..9).map(|_| carousel.advance()).collect();
        assert_eq!(seen, vec![1, 2, 3, 0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn carousel_select_and_empty() {
        let mut carousel = Carousel::new(4);
        assert_eq!(carousel.select(3), 3);
        assert_eq!(carousel.advance(), 0);
        assert_eq!(carousel.select(7), 0);

        let mut empty = Carousel::new(0);
        assert_eq!(empty.advance(), 0);
        assert_eq!(empty.select(0), 0);
    }

    #[test]
    fn carousel_reducer_applies_to_latest_state() {
        let state = Rc::new(Carousel::new(3));
        let state = state.reduce(CarouselAction::Advance);
        let state = state.reduce(CarouselAction::Advance);
        assert_eq!(state.current(), 2);
        let state = state.reduce(CarouselAction::Advance);
        assert_eq!(state.current(), 0);

        let same = state.clone().reduce(CarouselAction::Select(0));
        assert!(Rc::ptr_eq(&state, &same));
    }

    #[test]
    fn stagger_delays() {
        assert_eq!(stagger(0, 2, 200), 400);
        assert_eq!(stagger(800, 1, 200), 1_000);
        assert_eq!(transition_delay(150), "transition-delay: 150ms;");
    }
}
