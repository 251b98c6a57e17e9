//! Testing utilities and gesture robot for Fabdock
//!
//! Scenario tests drive a [`MovableActionButton`](fabdock::MovableActionButton)
//! through scripted gestures instead of hand-rolled event bookkeeping:
//!
//! ```
//! use fabdock::{Anchor, MovableActionButton, MovableActionButtonSpec};
//! use fabdock_testing::{assert_anchor, GestureRobot};
//!
//! let spec = MovableActionButtonSpec::new().allowed_anchors(Anchor::CANONICAL.to_vec());
//! let button = MovableActionButton::new(spec, ());
//! let mut robot = GestureRobot::new(300.0, 600.0, button);
//!
//! robot.drag(290.0, 590.0, 40.0, 90.0);
//! assert_anchor(&robot, Anchor::TopStart, "after a drag to the top-left");
//! ```

pub mod robot;
pub mod robot_assertions;

pub use robot::*;
pub use robot_assertions::*;
