//! Property-based tests for rotation, timeline and parallax math
//!
//! Uses proptest to check the carousel and parallax invariants over
//! arbitrary input sequences.

use proptest::prelude::*;
use pmde_core::parallax::{pointer_offset, Extent, Layer, Point};
use pmde_core::{Rotation, RotationCommand, RotationTiming, Timeline};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Navigation steps: true = next, false = previous
fn steps_strategy() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..64)
}

/// Commands a user can issue against a carousel
fn command_strategy() -> impl Strategy<Value = RotationCommand> {
    prop_oneof![
        3 => Just(RotationCommand::Next),
        3 => Just(RotationCommand::Previous),
        2 => (0..12usize).prop_map(RotationCommand::Goto),
        1 => (0..12usize).prop_map(RotationCommand::Hover),
        1 => (0..12usize).prop_map(RotationCommand::Select),
        1 => Just(RotationCommand::Leave),
    ]
}

fn extent_strategy() -> impl Strategy<Value = Extent> {
    (1.0..4000.0f64, 1.0..4000.0f64).prop_map(|(w, h)| Extent::new(w, h))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// With at most one slide nothing ever moves
    #[test]
    fn single_slide_never_moves(len in 0..=1usize, steps in steps_strategy()) {
        let mut rotation = Rotation::new(len);
        for step in steps {
            let started = if step { rotation.next() } else { rotation.previous() };
            prop_assert!(started.is_none());
            prop_assert!(rotation.tick(true).is_none());
        }
        prop_assert_eq!(rotation.index(), 0);
    }

    /// Settled navigation lands on the sum of steps modulo the slide count
    #[test]
    fn index_is_sum_of_steps_mod_len(len in 2..20usize, steps in steps_strategy()) {
        let mut rotation = Rotation::new(len);
        let mut expected: i64 = 0;
        for step in steps {
            let started = if step { rotation.next() } else { rotation.previous() };
            prop_assert!(started.is_some());
            expected += if step { 1 } else { -1 };
            rotation.complete_out();
            rotation.complete_in();
            prop_assert!(rotation.index() < len);
        }
        prop_assert_eq!(rotation.index() as i64, expected.rem_euclid(len as i64));
    }

    /// Index stays in range and at most one transition runs, whatever the input
    #[test]
    fn timeline_index_always_in_range(
        len in 1..12usize,
        commands in prop::collection::vec((command_strategy(), 0..2000u64), 0..40),
    ) {
        let mut timeline = Timeline::new(len, RotationTiming { interval_ms: Some(700), transition_ms: 300 }, 0);
        let mut now = 0;
        for (command, gap) in commands {
            now += gap;
            let was_animating = {
                timeline.advance_to(now);
                timeline.is_animating()
            };
            let started = timeline.apply(command, now);
            if was_animating && matches!(command, RotationCommand::Next | RotationCommand::Previous | RotationCommand::Goto(_)) {
                prop_assert!(started.is_none());
            }
            prop_assert!(timeline.index() < len);
        }
    }

    /// Requests strictly inside the transition window are dropped
    #[test]
    fn requests_inside_window_dropped(len in 2..10usize, start in 0..100_000u64, offset in 1..300u64) {
        let mut timeline = Timeline::new(len, RotationTiming::faded(300), start);
        prop_assert!(timeline.apply(RotationCommand::Next, start).is_some());
        prop_assert!(timeline.apply(RotationCommand::Next, start + offset).is_none());
        prop_assert!(timeline.apply(RotationCommand::Previous, start + offset).is_none());
        timeline.advance_to(start + 600);
        prop_assert_eq!(timeline.index(), 1);
    }

    /// A pointer at the exact centre never displaces any layer
    #[test]
    fn centre_pointer_is_still(extent in extent_strategy(), strength in 0.0..100.0f64) {
        let centre = Point::new(extent.width / 2.0, extent.height / 2.0);
        for layer in [Layer::Background, Layer::Middle, Layer::Foreground] {
            let offset = pointer_offset(centre, extent, strength, layer);
            prop_assert!(offset.x.abs() < 1e-9 && offset.y.abs() < 1e-9);
        }
    }

    /// Foreground always moves further than the middle layer
    #[test]
    fn foreground_outpaces_middle(
        extent in extent_strategy(),
        px in 0.0..4000.0f64,
        py in 0.0..4000.0f64,
        strength in 0.1..100.0f64,
    ) {
        let pointer = Point::new(px, py);
        let centre = extent.center();
        prop_assume!((pointer.x - centre.x).abs() > 1e-6 || (pointer.y - centre.y).abs() > 1e-6);

        let middle = pointer_offset(pointer, extent, strength, Layer::Middle);
        let foreground = pointer_offset(pointer, extent, strength, Layer::Foreground);
        prop_assert!(foreground.magnitude() > middle.magnitude());
    }
}
