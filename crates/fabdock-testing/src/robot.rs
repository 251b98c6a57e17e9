//! Gesture robot: scripted pointer sequences against a button.

use fabdock::{DropOutcome, LayoutDirection, MovableActionButton, Point, Rect};

/// Milliseconds between interpolated move steps, one 60 fps frame.
const STEP_MS: i64 = 16;

/// Interpolated steps per [`drag_to`](GestureRobot::drag_to).
const MOVE_STEPS: usize = 10;

/// Drives a [`MovableActionButton`] with synthetic gestures.
///
/// The robot owns the button, the container rect, the layout direction,
/// and a synthetic clock, so scenario tests read as user interactions:
/// press, drag, settle, release. Timestamps advance deterministically;
/// nothing here touches a real clock.
pub struct GestureRobot<F> {
    button: MovableActionButton<F>,
    container: Rect,
    direction: LayoutDirection,
    cursor: Point,
    time_ms: i64,
    pressed: bool,
    last_outcome: Option<DropOutcome>,
}

impl<F> GestureRobot<F> {
    /// Robot around `button` with a container of the given size at origin.
    pub fn new(width: f32, height: f32, button: MovableActionButton<F>) -> Self {
        Self {
            button,
            container: Rect::new(0.0, 0.0, width, height),
            direction: LayoutDirection::default(),
            cursor: Point::ZERO,
            time_ms: 0,
            pressed: false,
            last_outcome: None,
        }
    }

    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn button(&self) -> &MovableActionButton<F> {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut MovableActionButton<F> {
        &mut self.button
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    /// Outcome of the most recent release, if any.
    pub fn last_outcome(&self) -> Option<DropOutcome> {
        self.last_outcome
    }

    /// Advances the synthetic clock without producing events.
    pub fn advance_time(&mut self, ms: i64) {
        self.time_ms += ms;
    }

    /// Presses at the given coordinates.
    pub fn press_at(&mut self, x: f32, y: f32) {
        debug_assert!(self.container.contains(x, y), "press outside container");
        self.cursor = Point::new(x, y);
        self.time_ms += STEP_MS;
        self.button.drag_started(self.time_ms, self.cursor);
        self.pressed = true;
    }

    /// Drags to the given coordinates in frame-paced steps.
    ///
    /// The pacing leaves real release momentum behind; call
    /// [`settle`](Self::settle) before releasing when a test wants the raw
    /// translation only.
    pub fn drag_to(&mut self, x: f32, y: f32) {
        self.move_steps(x, y, MOVE_STEPS, STEP_MS);
    }

    /// Drags to the coordinates fast enough to read as a fling.
    pub fn fling_to(&mut self, x: f32, y: f32) {
        self.move_steps(x, y, 4, 8);
    }

    fn move_steps(&mut self, x: f32, y: f32, steps: usize, step_ms: i64) {
        debug_assert!(self.pressed, "move without press");
        let from = self.cursor;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.cursor = Point::new(from.x + (x - from.x) * t, from.y + (y - from.y) * t);
            self.time_ms += step_ms;
            self.button.drag_moved(self.time_ms, self.cursor);
        }
    }

    /// Lets the pointer rest in place long enough to drain all momentum.
    pub fn settle(&mut self) {
        self.advance_time(64);
        self.button.drag_moved(self.time_ms, self.cursor);
    }

    /// Releases the pointer, resolving the drop.
    pub fn release(&mut self) -> DropOutcome {
        debug_assert!(self.pressed, "release without press");
        self.time_ms += STEP_MS;
        let outcome =
            self.button
                .drag_ended(self.container, self.direction, self.time_ms, self.cursor);
        self.pressed = false;
        self.last_outcome = Some(outcome);
        outcome
    }

    /// Cancels the in-flight gesture.
    pub fn cancel(&mut self) {
        self.button.drag_cancelled();
        self.pressed = false;
    }

    /// Press, drag, settle, release in one call. The settle step drains
    /// momentum, so only the raw translation decides the drop.
    pub fn drag(&mut self, from_x: f32, from_y: f32, to_x: f32, to_y: f32) -> DropOutcome {
        self.press_at(from_x, from_y);
        self.drag_to(to_x, to_y);
        self.settle();
        self.release()
    }

    /// Press, fast drag, release in one call, keeping release momentum.
    pub fn fling(&mut self, from_x: f32, from_y: f32, to_x: f32, to_y: f32) -> DropOutcome {
        self.press_at(from_x, from_y);
        self.fling_to(to_x, to_y);
        self.release()
    }

    /// Press and release in place without crossing the touch slop.
    pub fn tap_at(&mut self, x: f32, y: f32) -> DropOutcome {
        self.press_at(x, y);
        self.time_ms += STEP_MS;
        self.release()
    }
}
