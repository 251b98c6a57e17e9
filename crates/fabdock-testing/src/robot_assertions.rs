//! Assertion helpers for gesture robot tests.

use fabdock::DropOutcome;
use fabdock_anchor::Anchor;
use fabdock_geometry::Offset;

use crate::GestureRobot;

/// Asserts the button rests at `expected`.
pub fn assert_anchor<F>(robot: &GestureRobot<F>, expected: Anchor, msg: &str) {
    let actual = robot.button().anchor();
    assert_eq!(
        actual, expected,
        "{msg}: expected anchor {expected:?}, got {actual:?}"
    );
}

/// Asserts the drag offset has been reset.
pub fn assert_offset_zero<F>(robot: &GestureRobot<F>, msg: &str) {
    let offset = robot.button().drag_offset();
    assert_eq!(
        offset,
        Offset::ZERO,
        "{msg}: expected a zero drag offset, got {offset:?}"
    );
}

/// Asserts the most recent release produced `expected`.
pub fn assert_outcome<F>(robot: &GestureRobot<F>, expected: DropOutcome, msg: &str) {
    let actual = robot.last_outcome();
    assert_eq!(
        actual,
        Some(expected),
        "{msg}: expected outcome {expected:?}, got {actual:?}"
    );
}
