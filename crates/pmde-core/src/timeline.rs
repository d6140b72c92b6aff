//! Timer scheduling for a [`Rotation`].
//!
//! A [`Timeline`] owns at most two pending deadlines, the next auto-rotation
//! tick and the end of the current transition phase, both in absolute
//! milliseconds. Re-arming replaces a deadline in place, so a carousel can
//! never hold two live timers. The UI driver sleeps until
//! [`Timeline::next_deadline`], then calls [`Timeline::advance_to`]; tests
//! drive the same type with synthetic clocks.

use crate::rotation::{Phase, Rotation, Transition};

/// Timing policy of one carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationTiming {
    /// Auto-advance period; `None` disables auto-rotation
    pub interval_ms: Option<u64>,
    /// Length of each fade phase; zero swaps slides instantly
    pub transition_ms: u64,
}

impl RotationTiming {
    /// Hero content: instant swap on a fixed period
    pub fn hero(interval_ms: u64) -> Self {
        Self {
            interval_ms: Some(interval_ms),
            transition_ms: 0,
        }
    }

    /// Manual navigation only, faded out and back in
    pub fn faded(transition_ms: u64) -> Self {
        Self {
            interval_ms: None,
            transition_ms,
        }
    }

    /// Sub-item icon highlight rotation
    pub fn sub_items(interval_ms: u64) -> Self {
        Self {
            interval_ms: Some(interval_ms),
            transition_ms: 0,
        }
    }

    pub fn manual() -> Self {
        Self {
            interval_ms: None,
            transition_ms: 0,
        }
    }

    pub fn auto_enabled(&self) -> bool {
        matches!(self.interval_ms, Some(ms) if ms > 0)
    }
}

/// Input events a carousel accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationCommand {
    Next,
    Previous,
    Goto(usize),
    Hover(usize),
    Select(usize),
    Leave,
    Reset(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    rotation: Rotation,
    timing: RotationTiming,
    next_tick_at: Option<u64>,
    phase_deadline: Option<u64>,
}

impl Timeline {
    pub fn new(len: usize, timing: RotationTiming, now: u64) -> Self {
        let mut timeline = Self {
            rotation: Rotation::new(len),
            timing,
            next_tick_at: None,
            phase_deadline: None,
        };
        timeline.arm_tick(now);
        timeline
    }

    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    pub fn index(&self) -> usize {
        self.rotation.index()
    }

    pub fn timing(&self) -> RotationTiming {
        self.timing
    }

    /// True while a transition is running; navigation is disabled meanwhile
    pub fn is_animating(&self) -> bool {
        !self.rotation.is_idle()
    }

    /// Earliest pending deadline, if any
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.phase_deadline, self.next_tick_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Next tick after `at`. A tick past the end of the clock never fires.
    fn tick_after(&self, at: u64) -> Option<u64> {
        self.timing
            .interval_ms
            .filter(|&interval| interval > 0)
            .and_then(|interval| at.checked_add(interval))
    }

    fn arm_tick(&mut self, from: u64) {
        self.next_tick_at = if self.rotation.can_navigate() && !self.rotation.is_paused() {
            self.tick_after(from)
        } else {
            None
        };
    }

    fn start(&mut self, transition: Option<Transition>, at: u64) -> Option<Transition> {
        if transition.is_some() {
            self.phase_deadline = Some(at.saturating_add(self.timing.transition_ms));
        }
        transition
    }

    /// Fire every event due at or before `now`, in deadline order.
    /// Returns true when the visible state changed.
    pub fn advance_to(&mut self, now: u64) -> bool {
        let mut changed = false;
        loop {
            let phase_due = self.phase_deadline.filter(|&at| at <= now);
            let tick_due = self.next_tick_at.filter(|&at| at <= now);

            match (phase_due, tick_due) {
                // Phase completions win ties so a tick sees the settled state.
                (Some(at), tick) if tick.map_or(true, |t| at <= t) => {
                    match self.rotation.phase() {
                        Phase::TransitioningOut { .. } => {
                            self.rotation.complete_out();
                            self.phase_deadline = Some(at.saturating_add(self.timing.transition_ms));
                        }
                        Phase::TransitioningIn => {
                            self.rotation.complete_in();
                            self.phase_deadline = None;
                        }
                        Phase::Idle => self.phase_deadline = None,
                    }
                    changed = true;
                }
                (_, Some(at)) => {
                    self.next_tick_at = self.tick_after(at);
                    let auto = self.timing.auto_enabled();
                    let transition = self.rotation.tick(auto);
                    if transition.is_some() {
                        tracing::trace!(at, ?transition, "rotation tick");
                        changed = true;
                    }
                    self.start(transition, at);
                }
                _ => break,
            }
        }
        changed
    }

    /// Apply a user command at `now`. Navigation returns the started
    /// transition, or `None` when it was dropped.
    pub fn apply(&mut self, command: RotationCommand, now: u64) -> Option<Transition> {
        self.advance_to(now);
        let started = match command {
            RotationCommand::Next => {
                let transition = self.rotation.next();
                self.start(transition, now)
            }
            RotationCommand::Previous => {
                let transition = self.rotation.previous();
                self.start(transition, now)
            }
            RotationCommand::Goto(index) => {
                let transition = self.rotation.goto(index);
                self.start(transition, now)
            }
            RotationCommand::Hover(index) | RotationCommand::Select(index) => {
                self.rotation.hover(index);
                self.phase_deadline = None;
                self.arm_tick(now);
                None
            }
            RotationCommand::Leave => {
                self.rotation.leave();
                self.arm_tick(now);
                None
            }
            RotationCommand::Reset(len) => {
                self.rotation.reset(len);
                self.phase_deadline = None;
                self.arm_tick(now);
                None
            }
        };
        if started.is_none() && matches!(command, RotationCommand::Next | RotationCommand::Previous | RotationCommand::Goto(_)) {
            tracing::debug!(?command, "navigation dropped");
        }
        // Instant transitions complete in the same instant.
        self.advance_to(now);
        started
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_ticks_on_cadence() {
        let mut timeline = Timeline::new(3, RotationTiming::hero(5000), 0);
        assert_eq!(timeline.next_deadline(), Some(5000));

        timeline.advance_to(4999);
        assert_eq!(timeline.index(), 0);

        assert!(timeline.advance_to(5000));
        assert_eq!(timeline.index(), 1);
        assert!(!timeline.is_animating());
        assert_eq!(timeline.next_deadline(), Some(10000));
    }

    #[test]
    fn catches_up_after_long_sleep() {
        let mut timeline = Timeline::new(4, RotationTiming::hero(1000), 0);
        timeline.advance_to(3500);
        assert_eq!(timeline.index(), 3);
    }

    #[test]
    fn manual_timing_never_ticks() {
        let mut timeline = Timeline::new(5, RotationTiming::faded(300), 0);
        assert_eq!(timeline.next_deadline(), None);
        timeline.advance_to(1_000_000);
        assert_eq!(timeline.index(), 0);
    }

    #[test]
    fn fade_runs_out_then_in() {
        let mut timeline = Timeline::new(5, RotationTiming::faded(300), 0);
        assert!(timeline.apply(RotationCommand::Next, 0).is_some());
        assert_eq!(timeline.index(), 0);
        assert!(timeline.is_animating());
        assert_eq!(timeline.next_deadline(), Some(300));

        timeline.advance_to(300);
        assert_eq!(timeline.index(), 1);
        assert_eq!(timeline.rotation().phase(), Phase::TransitioningIn);

        timeline.advance_to(600);
        assert!(!timeline.is_animating());
        assert_eq!(timeline.next_deadline(), None);
    }

    #[test]
    fn request_inside_window_dropped() {
        let mut timeline = Timeline::new(5, RotationTiming::faded(300), 1000);
        timeline.apply(RotationCommand::Next, 1000);
        assert!(timeline.apply(RotationCommand::Next, 1150).is_none());
        assert!(timeline.apply(RotationCommand::Previous, 1299).is_none());
        timeline.advance_to(1600);
        assert_eq!(timeline.index(), 1);
        assert!(timeline.apply(RotationCommand::Next, 1600).is_some());
    }

    #[test]
    fn hover_pauses_and_leave_resumes_on_next_boundary() {
        let mut timeline = Timeline::new(4, RotationTiming::sub_items(3000), 0);
        timeline.apply(RotationCommand::Hover(2), 1000);
        assert_eq!(timeline.index(), 2);
        assert_eq!(timeline.next_deadline(), None);

        timeline.advance_to(20_000);
        assert_eq!(timeline.index(), 2);

        timeline.apply(RotationCommand::Leave, 20_000);
        assert_eq!(timeline.next_deadline(), Some(23_000));
        timeline.advance_to(23_000);
        assert_eq!(timeline.index(), 3);
    }

    #[test]
    fn reset_rearms_from_zero() {
        let mut timeline = Timeline::new(4, RotationTiming::sub_items(3000), 0);
        timeline.apply(RotationCommand::Select(3), 100);
        timeline.apply(RotationCommand::Reset(6), 500);
        assert_eq!(timeline.index(), 0);
        assert!(!timeline.rotation().is_paused());
        assert_eq!(timeline.next_deadline(), Some(3500));
    }

    #[test]
    fn reset_to_single_item_disarms() {
        let mut timeline = Timeline::new(4, RotationTiming::sub_items(3000), 0);
        timeline.apply(RotationCommand::Reset(1), 10);
        assert_eq!(timeline.next_deadline(), None);
    }

    #[test]
    fn tick_during_fade_is_skipped() {
        let timing = RotationTiming {
            interval_ms: Some(1000),
            transition_ms: 300,
        };
        let mut timeline = Timeline::new(3, timing, 0);
        // manual nav at 900 runs until 1500, swallowing the 1000 tick
        timeline.apply(RotationCommand::Next, 900);
        timeline.advance_to(1500);
        assert_eq!(timeline.index(), 1);
        assert_eq!(timeline.next_deadline(), Some(2000));

        timeline.advance_to(2600);
        assert_eq!(timeline.index(), 2);
    }

    #[test]
    fn huge_interval_never_overflows() {
        let start = 1_700_000_000_000;
        let mut timeline = Timeline::new(2, RotationTiming::hero(u64::MAX), start);
        assert_eq!(timeline.next_deadline(), None);
        assert!(!timeline.advance_to(start + 1));
        assert_eq!(timeline.index(), 0);
    }

    #[test]
    fn tick_near_end_of_clock_fires_once() {
        let mut timeline = Timeline::new(3, RotationTiming::hero(1000), u64::MAX - 1500);
        assert_eq!(timeline.next_deadline(), Some(u64::MAX - 500));
        assert!(timeline.advance_to(u64::MAX));
        assert_eq!(timeline.index(), 1);
        assert_eq!(timeline.next_deadline(), None);
    }

    #[test]
    fn fade_at_end_of_clock_still_settles() {
        let mut timeline = Timeline::new(3, RotationTiming::faded(u64::MAX), 10);
        assert!(timeline.apply(RotationCommand::Next, 10).is_some());
        assert_eq!(timeline.next_deadline(), Some(u64::MAX));
        timeline.advance_to(u64::MAX);
        assert_eq!(timeline.index(), 1);
        assert!(!timeline.is_animating());
    }
}
