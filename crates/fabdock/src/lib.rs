//! Movable action button behavior: drag, fling, and snap-to-anchor
//!
//! A floating action button the user can drag anywhere and that, on
//! release, snaps to the nearest allowed anchor of its container. The
//! crate is headless: the host toolkit renders the button, recognizes
//! pointer input, and animates transitions, while this crate owns the
//! anchor state and the drop decision.
//!
//! ```
//! use fabdock::{Anchor, MovableActionButton, MovableActionButtonSpec};
//!
//! let spec = MovableActionButtonSpec::new().initial_anchor(Anchor::BottomEnd);
//! let button = MovableActionButton::new(spec, || "(+)");
//! assert_eq!(button.anchor(), Anchor::BottomEnd);
//! ```

mod button;

pub use button::*;

pub use fabdock_anchor::{
    drop_candidates, drop_point, resolve_drop, Anchor, DropCandidate, HorizontalAnchor,
    VerticalAnchor,
};
pub use fabdock_geometry::{LayoutDirection, Offset, Point, Rect, Size, Velocity};
pub use fabdock_gesture::{
    DragEndInfo, DragTracker, FlingCalculator, PointerEvent, PointerEventKind, SampleClock,
    MAX_FLING_VELOCITY, TOUCH_SLOP,
};
