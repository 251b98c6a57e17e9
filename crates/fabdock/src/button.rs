//! The movable action button: spec, state holder, and drop pipeline.

use std::rc::Rc;

use fabdock_anchor::{resolve_drop, Anchor};
use fabdock_geometry::{LayoutDirection, Offset, Point, Rect};
use fabdock_gesture::{DragTracker, FlingCalculator, PointerEvent, PointerEventKind};

/// Configuration for a [`MovableActionButton`].
#[derive(Clone, Debug, PartialEq)]
pub struct MovableActionButtonSpec {
    /// Anchor the button occupies before any drag.
    pub initial_anchor: Anchor,
    /// Anchors the button may settle into. May be any subset of the nine;
    /// when empty, every drop keeps the current anchor.
    pub allowed_anchors: Vec<Anchor>,
    /// Fling physics used to predict where a release with momentum lands.
    pub fling: FlingCalculator,
}

impl MovableActionButtonSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_anchor(mut self, anchor: Anchor) -> Self {
        self.initial_anchor = anchor;
        self
    }

    pub fn allowed_anchors(mut self, anchors: impl Into<Vec<Anchor>>) -> Self {
        self.allowed_anchors = anchors.into();
        self
    }

    pub fn fling(mut self, fling: FlingCalculator) -> Self {
        self.fling = fling;
        self
    }
}

impl Default for MovableActionButtonSpec {
    /// Bottom-end button that may settle into any corner.
    fn default() -> Self {
        Self {
            initial_anchor: Anchor::BottomEnd,
            allowed_anchors: Anchor::CORNERS.to_vec(),
            fling: FlingCalculator::default(),
        }
    }
}

/// What a released drag did to the button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// The button committed to a new anchor. Hosts usually animate the
    /// transition between the two reference points.
    Moved { from: Anchor, to: Anchor },
    /// The nearest allowed anchor was already the current one; only the
    /// drag offset was reset.
    Unchanged,
    /// No allowed anchor exists. The current anchor was kept and the drag
    /// offset reset.
    NoCandidate,
}

/// A floating action button the user can drag between anchors.
///
/// The host renders `content()` at [`anchor`](Self::anchor) translated by
/// [`drag_offset`](Self::drag_offset), feeds pointer input through the
/// `drag_*` methods or [`handle_pointer_event`](Self::handle_pointer_event),
/// and reacts to the returned [`DropOutcome`]. Resolution itself is the
/// pure [`resolve_drop`]; this type owns the state around it.
pub struct MovableActionButton<F> {
    content: F,
    anchor: Anchor,
    drag_offset: Offset,
    allowed_anchors: Vec<Anchor>,
    tracker: DragTracker,
    on_anchor_changed: Option<Rc<dyn Fn(Anchor)>>,
}

impl<F> MovableActionButton<F> {
    /// Builds the behavior from `spec` around an opaque content value.
    ///
    /// `content` is whatever the host renders as the button face; the
    /// behavior never inspects it.
    pub fn new(spec: MovableActionButtonSpec, content: F) -> Self {
        Self {
            content,
            anchor: spec.initial_anchor,
            drag_offset: Offset::ZERO,
            allowed_anchors: spec.allowed_anchors,
            tracker: DragTracker::new(spec.fling),
            on_anchor_changed: None,
        }
    }

    /// Registers a handler fired when a release commits a different anchor.
    ///
    /// The handler receives the new anchor and runs before the commit is
    /// observable through [`anchor`](Self::anchor). It does not fire when a
    /// release resolves to the anchor the button already occupies.
    pub fn anchor_changed(mut self, handler: impl Fn(Anchor) + 'static) -> Self {
        self.on_anchor_changed = Some(Rc::new(handler));
        self
    }

    /// The anchor the button currently rests at.
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Translation of the in-flight drag, zero while the button rests.
    pub fn drag_offset(&self) -> Offset {
        self.drag_offset
    }

    /// Anchors the button may settle into.
    pub fn allowed_anchors(&self) -> &[Anchor] {
        &self.allowed_anchors
    }

    /// True while a gesture has crossed the touch slop and is following
    /// the pointer.
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub fn content(&self) -> &F {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut F {
        &mut self.content
    }

    /// Starts a gesture at `position`.
    pub fn drag_started(&mut self, time_ms: i64, position: Point) {
        self.tracker.begin(time_ms, position);
    }

    /// Feeds a pointer move and returns the offset the host should render
    /// the button at. The resolver never runs mid-drag.
    pub fn drag_moved(&mut self, time_ms: i64, position: Point) -> Offset {
        self.drag_offset = self.tracker.update(time_ms, position);
        self.drag_offset
    }

    /// Finishes the gesture against the container's current bounds.
    ///
    /// The release velocity is folded into a predicted end translation, the
    /// nearest allowed anchor to that point wins, and the drag offset resets
    /// whatever the outcome. Sub-slop gestures are taps and never resolve.
    pub fn drag_ended(
        &mut self,
        container: Rect,
        direction: LayoutDirection,
        time_ms: i64,
        position: Point,
    ) -> DropOutcome {
        // The release position may cross the slop on its own.
        self.tracker.update(time_ms, position);
        let was_drag = self.tracker.is_dragging();
        let end = self.tracker.end(time_ms, position);
        self.drag_offset = Offset::ZERO;

        if !was_drag {
            return DropOutcome::Unchanged;
        }

        log::trace!(
            "drag ended: translation {:?}, predicted {:?}",
            end.translation,
            end.predicted_translation
        );

        let resolved = resolve_drop(
            container,
            self.anchor,
            direction,
            end.predicted_translation,
            &self.allowed_anchors,
        );

        match resolved {
            None => {
                log::warn!(
                    "no allowed anchor to settle into, button stays at {:?}",
                    self.anchor
                );
                DropOutcome::NoCandidate
            }
            Some(next) if next == self.anchor => DropOutcome::Unchanged,
            Some(next) => {
                let from = self.anchor;
                if let Some(handler) = &self.on_anchor_changed {
                    handler(next);
                }
                self.anchor = next;
                log::debug!("anchor committed: {from:?} -> {next:?}");
                DropOutcome::Moved { from, to: next }
            }
        }
    }

    /// Abandons the gesture: the offset resets and no resolution happens.
    pub fn drag_cancelled(&mut self) {
        self.tracker.cancel();
        self.drag_offset = Offset::ZERO;
    }

    /// Routes a pointer event to the drag pipeline.
    ///
    /// Returns the drop outcome for `Up` events, `None` for the rest.
    pub fn handle_pointer_event(
        &mut self,
        container: Rect,
        direction: LayoutDirection,
        event: PointerEvent,
    ) -> Option<DropOutcome> {
        match event.kind {
            PointerEventKind::Down => {
                self.drag_started(event.time_ms, event.position);
                None
            }
            PointerEventKind::Move => {
                self.drag_moved(event.time_ms, event.position);
                None
            }
            PointerEventKind::Up => {
                Some(self.drag_ended(container, direction, event.time_ms, event.position))
            }
            PointerEventKind::Cancel => {
                self.drag_cancelled();
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/button_tests.rs"]
mod tests;
