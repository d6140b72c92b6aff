//! Carousel rotation state machine.
//!
//! One [`Rotation`] is owned by each carousel instance (hero content,
//! testimonials, services, sub-item icons). It knows nothing about time:
//! [`crate::timeline::Timeline`] decides when ticks and phase completions
//! happen and calls into it.
//!
//! ```text
//!            tick / next / previous / goto
//!   Idle(i) ───────────────────────────────▶ TransitioningOut { target }
//!      ▲                                              │ complete_out
//!      │ complete_in                                  ▼
//!      └──────────────────────────────────── TransitioningIn (index = target)
//! ```
//!
//! Navigation is only accepted in `Idle`, so two transitions never overlap.

/// Current transition phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Outgoing slide is animating away; `target` becomes active next
    TransitioningOut { target: usize },
    /// Incoming slide is animating in
    TransitioningIn,
}

/// Which side the incoming slide enters from. Has no effect on index arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Forward,
    Backward,
    #[default]
    None,
}

impl Direction {
    pub fn sign(&self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
            Direction::None => 0,
        }
    }
}

/// A started slide change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    len: usize,
    index: usize,
    phase: Phase,
    paused: bool,
    direction: Direction,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            phase: Phase::Idle,
            paused: false,
            direction: Direction::None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the slide currently on screen
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Direction of the most recent transition
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Navigation controls are only meaningful with more than one slide
    pub fn can_navigate(&self) -> bool {
        self.len > 1
    }

    fn begin(&mut self, to: usize, direction: Direction) -> Option<Transition> {
        if !self.can_navigate() || !self.is_idle() {
            return None;
        }
        let from = self.index;
        self.phase = Phase::TransitioningOut { target: to };
        self.direction = direction;
        Some(Transition { from, to, direction })
    }

    /// Timer tick. Ignored unless auto-rotation is on, unpaused and idle.
    pub fn tick(&mut self, auto_enabled: bool) -> Option<Transition> {
        if !auto_enabled || self.paused {
            return None;
        }
        self.next()
    }

    pub fn next(&mut self) -> Option<Transition> {
        if self.len == 0 {
            return None;
        }
        self.begin((self.index + 1) % self.len, Direction::Forward)
    }

    pub fn previous(&mut self) -> Option<Transition> {
        if self.len == 0 {
            return None;
        }
        self.begin((self.index + self.len - 1) % self.len, Direction::Backward)
    }

    /// Jump to `index`. Out-of-range and same-slide requests are ignored.
    pub fn goto(&mut self, index: usize) -> Option<Transition> {
        if index >= self.len || index == self.index {
            return None;
        }
        let direction = if index > self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.begin(index, direction)
    }

    /// Outgoing animation finished: swap in the target slide.
    pub fn complete_out(&mut self) -> bool {
        match self.phase {
            Phase::TransitioningOut { target } => {
                self.index = target;
                self.phase = Phase::TransitioningIn;
                true
            }
            _ => false,
        }
    }

    /// Incoming animation finished.
    pub fn complete_in(&mut self) -> bool {
        match self.phase {
            Phase::TransitioningIn => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Pointer entered a sub-item: highlight it and hold rotation.
    pub fn hover(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.index = index;
        self.phase = Phase::Idle;
        self.paused = true;
    }

    /// Click on a sub-item; same effect as hovering it.
    pub fn select(&mut self, index: usize) {
        self.hover(index);
    }

    /// Pointer left the sub-item list.
    pub fn leave(&mut self) {
        self.paused = false;
    }

    /// Start over for a new list of `len` slides.
    pub fn reset(&mut self, len: usize) {
        *self = Rotation::new(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(rotation: &mut Rotation) {
        rotation.complete_out();
        rotation.complete_in();
    }

    #[test]
    fn starts_idle_at_zero() {
        let rotation = Rotation::new(5);
        assert_eq!(rotation.index(), 0);
        assert!(rotation.is_idle());
        assert!(!rotation.is_paused());
    }

    #[test]
    fn single_slide_is_noop() {
        for len in [0, 1] {
            let mut rotation = Rotation::new(len);
            assert!(rotation.next().is_none());
            assert!(rotation.previous().is_none());
            assert!(rotation.goto(0).is_none());
            assert!(rotation.tick(true).is_none());
            assert_eq!(rotation.index(), 0);
            assert!(!rotation.can_navigate());
        }
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut rotation = Rotation::new(7);
        let transition = rotation.previous().unwrap();
        assert_eq!(transition.to, 6);
        assert_eq!(transition.direction, Direction::Backward);
        settle(&mut rotation);
        assert_eq!(rotation.index(), 6);

        rotation.next();
        settle(&mut rotation);
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn index_changes_only_after_outgoing_phase() {
        let mut rotation = Rotation::new(3);
        rotation.next();
        assert_eq!(rotation.index(), 0);
        assert_eq!(rotation.phase(), Phase::TransitioningOut { target: 1 });

        assert!(rotation.complete_out());
        assert_eq!(rotation.index(), 1);
        assert_eq!(rotation.phase(), Phase::TransitioningIn);

        assert!(rotation.complete_in());
        assert!(rotation.is_idle());
    }

    #[test]
    fn navigation_dropped_mid_transition() {
        let mut rotation = Rotation::new(4);
        assert!(rotation.next().is_some());
        assert!(rotation.next().is_none());
        assert!(rotation.goto(3).is_none());
        rotation.complete_out();
        assert!(rotation.previous().is_none());
        rotation.complete_in();
        assert_eq!(rotation.index(), 1);
    }

    #[test]
    fn completions_out_of_order_are_ignored() {
        let mut rotation = Rotation::new(3);
        assert!(!rotation.complete_in());
        assert!(!rotation.complete_out());
        rotation.next();
        assert!(!rotation.complete_in());
    }

    #[test]
    fn goto_direction_and_bounds() {
        let mut rotation = Rotation::new(5);
        assert!(rotation.goto(5).is_none());
        assert!(rotation.goto(0).is_none());

        assert_eq!(rotation.goto(3).unwrap().direction, Direction::Forward);
        settle(&mut rotation);
        assert_eq!(rotation.goto(1).unwrap().direction, Direction::Backward);
    }

    #[test]
    fn tick_respects_auto_and_pause() {
        let mut rotation = Rotation::new(3);
        assert!(rotation.tick(false).is_none());

        rotation.hover(2);
        assert_eq!(rotation.index(), 2);
        assert!(rotation.is_paused());
        assert!(rotation.tick(true).is_none());

        rotation.leave();
        assert_eq!(rotation.tick(true).unwrap().to, 0);
    }

    #[test]
    fn hover_out_of_range_ignored() {
        let mut rotation = Rotation::new(2);
        rotation.hover(9);
        assert_eq!(rotation.index(), 0);
        assert!(!rotation.is_paused());
    }

    #[test]
    fn reset_returns_to_start() {
        let mut rotation = Rotation::new(4);
        rotation.select(3);
        rotation.reset(6);
        assert_eq!(rotation, Rotation::new(6));
    }
}
