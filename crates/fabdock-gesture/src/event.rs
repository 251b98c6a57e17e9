//! Pointer events consumed by the drag pipeline.

use fabdock_geometry::Point;

/// Phase of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single pointer event with a caller-supplied timestamp.
///
/// Timestamps are milliseconds on any monotonic scale; only differences
/// between samples matter. Hosts that receive timestamps with their input
/// events should pass those through, which keeps replays deterministic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    pub time_ms: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, time_ms: i64) -> Self {
        Self {
            kind,
            position,
            time_ms,
        }
    }

    pub fn down(position: Point, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Down, position, time_ms)
    }

    pub fn moved(position: Point, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Move, position, time_ms)
    }

    pub fn up(position: Point, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Up, position, time_ms)
    }

    pub fn cancel(position: Point, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Cancel, position, time_ms)
    }
}
