//! Per-gesture drag tracking.
//!
//! A [`DragTracker`] follows one pointer from press to release: it gates
//! movement behind the touch slop, accumulates the live translation, and on
//! release folds the release velocity into a predicted end translation.

use fabdock_geometry::{Offset, Point, Velocity};

use crate::{FlingCalculator, VelocityTracker, MAX_FLING_VELOCITY, TOUCH_SLOP};

/// Everything a drop pipeline needs from a finished drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEndInfo {
    /// Raw translation from press to release.
    pub translation: Offset,
    /// Release velocity, clamped to [`MAX_FLING_VELOCITY`] per axis.
    pub velocity: Velocity,
    /// Translation projected to the fling's rest point. Equals
    /// `translation` when the pointer had stopped before release.
    pub predicted_translation: Offset,
}

impl DragEndInfo {
    /// An end state with no movement and no momentum.
    pub const STILL: DragEndInfo = DragEndInfo {
        translation: Offset::ZERO,
        velocity: Velocity::ZERO,
        predicted_translation: Offset::ZERO,
    };
}

/// Tracks one drag gesture from press to release.
///
/// The translation stays zero until the pointer travels more than
/// [`TOUCH_SLOP`] from the press point; below that the sequence still reads
/// as a tap. Once the slop is crossed the translation covers the full
/// distance from the press point, slop included.
#[derive(Clone)]
pub struct DragTracker {
    fling: FlingCalculator,
    velocity: VelocityTracker,
    origin: Option<Point>,
    translation: Offset,
    slop_passed: bool,
}

impl DragTracker {
    pub fn new(fling: FlingCalculator) -> Self {
        Self {
            fling,
            velocity: VelocityTracker::new(),
            origin: None,
            translation: Offset::ZERO,
            slop_passed: false,
        }
    }

    /// Starts a gesture at `position`. Any gesture in flight is discarded.
    pub fn begin(&mut self, time_ms: i64, position: Point) {
        self.velocity.reset();
        self.velocity.add_position(time_ms, position);
        self.origin = Some(position);
        self.translation = Offset::ZERO;
        self.slop_passed = false;
    }

    /// Feeds a pointer move and returns the live translation.
    ///
    /// Moves arriving without a preceding [`begin`](Self::begin) are
    /// ignored.
    pub fn update(&mut self, time_ms: i64, position: Point) -> Offset {
        let Some(origin) = self.origin else {
            return Offset::ZERO;
        };
        self.velocity.add_position(time_ms, position);

        if !self.slop_passed && origin.distance_to(position) > TOUCH_SLOP {
            self.slop_passed = true;
            log::trace!("drag passed touch slop at {position:?}");
        }
        if self.slop_passed {
            self.translation = position - origin;
        }
        self.translation
    }

    /// Finishes the gesture and resets the tracker for the next one.
    ///
    /// Sub-slop gestures end [`STILL`](DragEndInfo::STILL): a tap never
    /// produces a translation, however sharp the pointer moved.
    pub fn end(&mut self, time_ms: i64, position: Point) -> DragEndInfo {
        if self.origin.is_none() {
            return DragEndInfo::STILL;
        }
        self.update(time_ms, position);

        let info = if self.slop_passed {
            let velocity = self.velocity.calculate_velocity_with_max(MAX_FLING_VELOCITY);
            let translation = self.translation;
            let predicted_translation = translation
                + Offset::new(
                    self.fling.fling_displacement(velocity.x),
                    self.fling.fling_displacement(velocity.y),
                );
            DragEndInfo {
                translation,
                velocity,
                predicted_translation,
            }
        } else {
            DragEndInfo::STILL
        };

        self.cancel();
        info
    }

    /// Abandons the gesture without producing an end state.
    pub fn cancel(&mut self) {
        self.velocity.reset();
        self.origin = None;
        self.translation = Offset::ZERO;
        self.slop_passed = false;
    }

    /// Translation accumulated so far.
    pub fn translation(&self) -> Offset {
        self.translation
    }

    /// True once the gesture has crossed the touch slop.
    pub fn is_dragging(&self) -> bool {
        self.slop_passed
    }

    /// True between [`begin`](Self::begin) and [`end`](Self::end) or
    /// [`cancel`](Self::cancel).
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }
}

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod tests;
